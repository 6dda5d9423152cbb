//! Application service — base image catalog.

use anyhow::Result;
use boxbuddy_common::ImageCandidate;

use crate::application::ports::BoxInspector;
use crate::domain::listing::{parse_image_catalog, sort_by_distro, sort_by_label};

/// Catalog sorted by guessed distribution.
///
/// # Errors
///
/// Returns an error if `distrobox` cannot be spawned.
pub async fn catalog_by_distro(gw: &impl BoxInspector) -> Result<Vec<ImageCandidate>> {
    let out = gw.image_catalog().await?;
    Ok(sort_by_distro(parse_image_catalog(&out.stdout)))
}

/// Catalog sorted by `"Distro - image"` label.
///
/// # Errors
///
/// Returns an error if `distrobox` cannot be spawned.
pub async fn catalog_by_label(gw: &impl BoxInspector) -> Result<Vec<ImageCandidate>> {
    let out = gw.image_catalog().await?;
    Ok(sort_by_label(parse_image_catalog(&out.stdout)))
}
