//! Application service — desktop apps installed inside a box.

use anyhow::{Context, Result};
use boxbuddy_common::LocalAppRecord;

use crate::application::ports::{BoxExecutor, CapturedOutput, ScriptInstaller};
use crate::domain::listing::parse_local_apps;

/// List desktop applications installed in `name`.
///
/// Installs the helper script first, then runs it inside the box.
///
/// # Errors
///
/// Returns an error if the script cannot be installed or `distrobox` cannot
/// be spawned.
pub async fn list_apps(
    gw: &impl BoxExecutor,
    installer: &impl ScriptInstaller,
    name: &str,
) -> Result<Vec<LocalAppRecord>> {
    let script = installer.install().context("installing app-listing helper")?;
    let script = script.to_string_lossy().into_owned();
    let out = gw.exec(name, &[script.as_str()]).await?;
    let apps = parse_local_apps(&out.stdout);
    tracing::debug!(name, count = apps.len(), "listed apps");
    Ok(apps)
}

/// Export an app's desktop entry from `name` to the host menu.
///
/// # Errors
///
/// Returns an error if `distrobox` cannot be spawned.
pub async fn export_app(gw: &impl BoxExecutor, name: &str, app: &str) -> Result<CapturedOutput> {
    tracing::info!(name, app, "exporting app");
    gw.exec(name, &["distrobox-export", "-a", app]).await
}

/// Launch an app's exec line inside `name` without waiting for it.
///
/// # Errors
///
/// Returns an error if `exec` is blank or the process cannot be spawned.
pub fn run_app(gw: &impl BoxExecutor, name: &str, exec: &str) -> Result<()> {
    let tokens: Vec<&str> = exec.split_whitespace().collect();
    anyhow::ensure!(!tokens.is_empty(), "nothing to run: exec command is empty");
    gw.launch(name, &tokens)
}
