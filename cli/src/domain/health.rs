//! Doctor check results and pure diagnostics.
//!
//! This module is intentionally free of I/O, async, and external layer imports.

use serde::Serialize;

use crate::domain::sandbox::Sandbox;
use crate::domain::terminal::Terminal;

/// Everything `boxbuddy doctor` found out about the host.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorChecks {
    /// Whether commands are escaped out of a Flatpak sandbox.
    pub sandbox: Sandbox,
    /// Whether `distrobox` is on the host `PATH`.
    pub distrobox_found: bool,
    /// Path printed by `which distrobox`, if any.
    pub distrobox_path: Option<String>,
    /// Terminal emulator sessions will open in.
    pub terminal: Terminal,
    /// Whether that emulator was found on `PATH` (always probed, even when pinned).
    pub terminal_found: bool,
    /// Path of the installed app-listing helper script.
    pub helper_script: Option<String>,
    /// Why the helper script could not be installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_script_error: Option<String>,
}

/// Turn failed checks into user-facing issue lines. Empty means healthy.
#[must_use]
pub fn collect_issues(checks: &DoctorChecks) -> Vec<String> {
    let mut issues = Vec::new();
    if !checks.distrobox_found {
        issues.push("distrobox is not installed or not on PATH".to_string());
    }
    if !checks.terminal_found {
        issues.push(format!(
            "{} not found; interactive sessions will fail to open",
            checks.terminal.program()
        ));
    }
    if let Some(e) = &checks.helper_script_error {
        issues.push(format!("helper script could not be installed: {e}"));
    }
    issues
}
