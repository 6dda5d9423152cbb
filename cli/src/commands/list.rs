//! `boxbuddy list` — show every box with its distro and status.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::offload::offload;
use crate::application::services::containers;
use crate::commands::wait_with_spinner;

/// Run the list command.
///
/// # Errors
///
/// Returns an error if distrobox is missing or cannot be run.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let gw = app.gateway.clone();
    let pending = offload(async move {
        containers::ensure_distrobox(&gw).await?;
        containers::list_containers(&gw).await
    });
    let boxes = wait_with_spinner(app, "Loading boxes...", "Boxes loaded", pending).await?;
    app.renderer().render_containers(&boxes)?;
    Ok(ExitCode::SUCCESS)
}
