//! `boxbuddy apps` — list, export and run applications installed in a box.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::offload::offload;
use crate::application::services::apps;
use crate::commands::wait_with_spinner;

/// Apps subcommands.
#[derive(Subcommand)]
pub enum AppsCommand {
    /// List graphical applications installed in a box
    List {
        /// Box name
        name: String,
    },
    /// Add an application's menu entry to the host
    Export {
        /// Box name
        name: String,
        /// Desktop file or app name, as shown by `apps list`
        app: String,
    },
    /// Start an application inside a box
    Run {
        /// Box name
        name: String,
        /// Command line, as shown by `apps list`
        exec: String,
    },
}

/// Run the apps command.
///
/// # Errors
///
/// Returns an error if distrobox cannot be run or the helper script cannot
/// be installed.
pub async fn run(app: &AppContext, cmd: AppsCommand) -> Result<ExitCode> {
    match cmd {
        AppsCommand::List { name } => list(app, name).await,
        AppsCommand::Export { name, app: entry } => export(app, name, entry).await,
        AppsCommand::Run { name, exec } => {
            apps::run_app(&app.gateway, &name, &exec)?;
            app.output.success(&format!("Started {exec} in {name}"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn list(app: &AppContext, name: String) -> Result<ExitCode> {
    let gw = app.gateway.clone();
    let scripts = app.scripts.clone();
    let task_name = name.clone();
    let pending = offload(async move { apps::list_apps(&gw, &scripts, &task_name).await });
    let found = wait_with_spinner(
        app,
        &format!("Looking for applications in {name}..."),
        "Applications loaded",
        pending,
    )
    .await?;
    app.renderer().render_apps(&name, &found)?;
    Ok(ExitCode::SUCCESS)
}

async fn export(app: &AppContext, name: String, entry: String) -> Result<ExitCode> {
    let gw = app.gateway.clone();
    let (task_name, task_entry) = (name.clone(), entry.clone());
    let pending = offload(async move { apps::export_app(&gw, &task_name, &task_entry).await });
    let out = wait_with_spinner(
        app,
        &format!("Exporting {entry}..."),
        &format!("Exported {entry} from {name}"),
        pending,
    )
    .await?;
    if app.is_json() {
        let value = serde_json::json!({
            "name": name,
            "app": entry,
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
