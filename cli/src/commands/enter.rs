//! `boxbuddy enter` — open a terminal inside a box.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::BoxSession;
use crate::commands::BoxArgs;

/// Run the enter command. Returns as soon as the terminal is spawned.
///
/// # Errors
///
/// Returns an error if the terminal emulator cannot be started.
pub async fn run(app: &AppContext, args: &BoxArgs) -> Result<ExitCode> {
    let terminal = app.gateway.enter(&args.name).await?;
    app.output.success(&format!(
        "Opened {} in {}",
        args.name,
        terminal.program()
    ));
    Ok(ExitCode::SUCCESS)
}
