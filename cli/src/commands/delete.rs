//! `boxbuddy delete` — force-remove a box.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::offload::offload;
use crate::application::services::containers;
use crate::commands::{DeleteArgs, wait_with_spinner};

/// Run the delete command.
///
/// # Errors
///
/// Returns an error if the prompt fails or distrobox cannot be run.
pub async fn run(app: &AppContext, args: &DeleteArgs) -> Result<ExitCode> {
    let name = args.name.clone();
    let prompt = format!("Delete box {name}? Everything inside it is lost.");
    if !(args.yes || app.non_interactive || app.confirm(&prompt, false)?) {
        app.output.info("Cancelled.");
        return Ok(ExitCode::SUCCESS);
    }

    let gw = app.gateway.clone();
    let task_name = name.clone();
    let pending = offload(async move { containers::delete_container(&gw, &task_name).await });
    let out = wait_with_spinner(
        app,
        &format!("Deleting {name}..."),
        &format!("Deleted {name}"),
        pending,
    )
    .await?;

    if app.is_json() {
        let value = serde_json::json!({
            "name": name,
            "stdout": out.stdout,
            "stderr": out.stderr,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        app.output.raw(&out.stderr);
        app.output.raw(&out.stdout);
    }
    Ok(ExitCode::SUCCESS)
}
