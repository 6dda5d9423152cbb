//! Application service — host diagnostics.

use crate::application::ports::{BoxSession, ScriptInstaller, ToolProbe};
use crate::domain::health::DoctorChecks;
use crate::domain::probe::tool_present;
use crate::domain::sandbox::Sandbox;

/// Probe everything `boxbuddy` depends on. Never fails; problems are
/// recorded in the returned checks.
pub async fn run_doctor(
    gw: &(impl ToolProbe + BoxSession),
    installer: &impl ScriptInstaller,
    sandbox: Sandbox,
) -> DoctorChecks {
    let (distrobox_found, distrobox_path) = probe(gw, "distrobox").await;
    let resolved = gw.terminal().await;
    let terminal = resolved.terminal;
    let terminal_found = resolved.confirmed || probe(gw, terminal.program()).await.0;

    let (helper_script, helper_script_error) = match installer.install() {
        Ok(path) => (Some(path.display().to_string()), None),
        Err(e) => (None, Some(format!("{e:#}"))),
    };

    DoctorChecks {
        sandbox,
        distrobox_found,
        distrobox_path,
        terminal,
        terminal_found,
        helper_script,
        helper_script_error,
    }
}

async fn probe(gw: &impl ToolProbe, tool: &str) -> (bool, Option<String>) {
    let Ok(out) = gw.which(tool).await else {
        return (false, None);
    };
    if tool_present(tool, &out.stdout, &out.stderr) {
        (true, out.stdout.lines().next().map(|l| l.trim().to_string()))
    } else {
        (false, None)
    }
}
