//! `boxbuddy upgrade` — upgrade a box's packages in a terminal.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::BoxSession;
use crate::commands::BoxArgs;

/// Run the upgrade command. Returns as soon as the terminal is spawned.
///
/// # Errors
///
/// Returns an error if the terminal emulator cannot be started.
pub async fn run(app: &AppContext, args: &BoxArgs) -> Result<ExitCode> {
    let terminal = app.gateway.upgrade(&args.name).await?;
    app.output.success(&format!(
        "Upgrading {} in {}",
        args.name,
        terminal.program()
    ));
    Ok(ExitCode::SUCCESS)
}
