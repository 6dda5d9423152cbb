//! `boxbuddy doctor` — check that boxes can be managed from here.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::offload::offload;
use crate::application::services::doctor::run_doctor;
use crate::commands::wait_with_spinner;
use crate::domain::health::collect_issues;

/// Run the doctor command. Exits non-zero when any issue is found.
///
/// # Errors
///
/// Returns an error if the checks cannot be run or rendered.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let gw = app.gateway.clone();
    let scripts = app.scripts.clone();
    let sandbox = app.sandbox;
    let pending = offload(async move { Ok(run_doctor(&gw, &scripts, sandbox).await) });
    let checks = wait_with_spinner(app, "Running checks...", "Checks complete", pending).await?;
    let issues = collect_issues(&checks);
    app.renderer()
        .render_doctor(&checks, &issues, app.verbose)?;
    if issues.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
