//! `boxbuddy images` — list base images distrobox can create boxes from.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::offload::offload;
use crate::application::services::images;
use crate::commands::{ImagesArgs, wait_with_spinner};

/// Run the images command.
///
/// # Errors
///
/// Returns an error if distrobox cannot be run.
pub async fn run(app: &AppContext, args: &ImagesArgs) -> Result<ExitCode> {
    let gw = app.gateway.clone();
    let by_distro = args.by_distro;
    let pending = offload(async move {
        if by_distro {
            images::catalog_by_distro(&gw).await
        } else {
            images::catalog_by_label(&gw).await
        }
    });
    let catalog = wait_with_spinner(app, "Fetching images...", "Images fetched", pending).await?;
    app.renderer().render_images(&catalog)?;
    Ok(ExitCode::SUCCESS)
}
