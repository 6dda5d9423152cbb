//! Application service — container listing and lifecycle use-cases.

use anyhow::Result;
use boxbuddy_common::ContainerRecord;

use crate::application::ports::{BoxInspector, BoxLifecycle, CapturedOutput, CreateSpec, ToolProbe};
use crate::domain::error::BoxError;
use crate::domain::listing::parse_container_list;
use crate::domain::probe::tool_present;

/// What happened during `create_container`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// Raw output of `distrobox create`; failures (e.g. name taken) show up here.
    pub create: CapturedOutput,
    /// Raw output of the init step, when it ran.
    pub init: Option<CapturedOutput>,
}

/// Check whether `distrobox` is on the host `PATH`.
///
/// A probe that cannot even be spawned counts as "not installed".
pub async fn distrobox_installed(probe: &impl ToolProbe) -> bool {
    match probe.which("distrobox").await {
        Ok(out) => tool_present("distrobox", &out.stdout, &out.stderr),
        Err(e) => {
            tracing::debug!(error = %e, "distrobox probe failed");
            false
        }
    }
}

/// Fail with [`BoxError::DistroboxNotInstalled`] unless distrobox is available.
///
/// # Errors
///
/// Returns an error if the probe says distrobox is missing.
pub async fn ensure_distrobox(probe: &impl ToolProbe) -> Result<()> {
    if distrobox_installed(probe).await {
        Ok(())
    } else {
        Err(BoxError::DistroboxNotInstalled.into())
    }
}

/// List all boxes. No output or a bare header yields an empty list.
///
/// # Errors
///
/// Returns an error if `distrobox` cannot be spawned.
pub async fn list_containers(gw: &impl BoxInspector) -> Result<Vec<ContainerRecord>> {
    let out = gw.list().await?;
    let boxes = parse_container_list(&out.stdout);
    tracing::debug!(count = boxes.len(), "listed boxes");
    Ok(boxes)
}

/// Create a box and, when `init` is set, run its first-entry setup.
///
/// Both outputs are returned untouched for the caller to show.
///
/// # Errors
///
/// Returns an error if `distrobox` cannot be spawned.
pub async fn create_container(
    gw: &impl BoxLifecycle,
    spec: &CreateSpec<'_>,
    init: bool,
) -> Result<CreateOutcome> {
    tracing::info!(name = spec.name, image = spec.image, "creating box");
    let create = gw.create(spec).await?;

    let init = if init {
        tracing::info!(name = spec.name, "initialising box");
        Some(gw.init(spec.name).await?)
    } else {
        None
    };

    Ok(CreateOutcome { create, init })
}

/// Force-remove a box. The output is returned unparsed.
///
/// # Errors
///
/// Returns an error if `distrobox` cannot be spawned.
pub async fn delete_container(gw: &impl BoxLifecycle, name: &str) -> Result<CapturedOutput> {
    tracing::info!(name, "removing box");
    gw.remove(name).await
}
