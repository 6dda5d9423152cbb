//! Command implementations

pub mod apps;
pub mod config;
pub mod create;
pub mod delete;
pub mod doctor;
pub mod enter;
pub mod images;
pub mod list;
pub mod upgrade;
pub mod version;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::offload::Pending;
use crate::output::progress;

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Box name (whitespace becomes `-`)
    pub name: String,
    /// Base image reference, or a label as printed by `boxbuddy images`
    #[arg(short, long)]
    pub image: String,
    /// Enter the box once after creation to finish its setup
    #[arg(long)]
    pub init: bool,
}

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Box name
    pub name: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments naming a single box.
#[derive(Args)]
pub struct BoxArgs {
    /// Box name
    pub name: String,
}

/// Arguments for the images command.
#[derive(Args)]
pub struct ImagesArgs {
    /// Group by distribution instead of sorting by label
    #[arg(long)]
    pub by_distro: bool,
}

/// Await offloaded work, showing a spinner while it runs.
///
/// The spinner is cleared on failure; `done` is printed on success.
pub(crate) async fn wait_with_spinner<T>(
    app: &AppContext,
    msg: &str,
    done: &str,
    pending: Pending<T>,
) -> Result<T> {
    if app.is_json() || !app.output.show_progress() {
        return pending.wait().await;
    }
    let pb = progress::spinner(msg);
    let result = pending.wait().await;
    match &result {
        Ok(_) => progress::finish_ok(&pb, done),
        Err(_) => pb.finish_and_clear(),
    }
    result
}
