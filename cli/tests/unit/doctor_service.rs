//! Doctor checks over a mocked runner.

use boxbuddy_cli::application::services::doctor::run_doctor;
use boxbuddy_cli::domain::health::collect_issues;
use boxbuddy_cli::domain::sandbox::Sandbox;
use boxbuddy_cli::domain::terminal::Terminal;

use crate::helpers::{BrokenScript, FixedScript, MockCommandRunner, gateway, out};

/// Answers `which <tool>` with a path only for the listed tools.
fn host_with(tools: &'static [&'static str]) -> MockCommandRunner {
    MockCommandRunner::responding(move |_, args| {
        let tool = args.first().copied().unwrap_or_default();
        if tools.iter().any(|t| *t == tool) {
            Ok(out(&format!("/usr/bin/{tool}\n")))
        } else {
            Ok(out(""))
        }
    })
}

#[tokio::test]
async fn healthy_host_has_no_issues() {
    let runner = host_with(&["distrobox", "gnome-terminal"]);
    let checks = run_doctor(&gateway(&runner), &FixedScript("/data/s.sh"), Sandbox::Host).await;
    assert!(checks.distrobox_found);
    assert_eq!(checks.distrobox_path.as_deref(), Some("/usr/bin/distrobox"));
    assert_eq!(checks.terminal, Terminal::GnomeTerminal);
    assert!(checks.terminal_found);
    assert_eq!(checks.helper_script.as_deref(), Some("/data/s.sh"));
    assert!(collect_issues(&checks).is_empty());
}

#[tokio::test]
async fn missing_distrobox_is_reported() {
    let runner = host_with(&["gnome-terminal"]);
    let checks = run_doctor(&gateway(&runner), &FixedScript("/s.sh"), Sandbox::Host).await;
    assert!(!checks.distrobox_found);
    assert!(checks.distrobox_path.is_none());
    let issues = collect_issues(&checks);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("distrobox"));
}

#[tokio::test]
async fn detected_terminal_is_not_probed_twice() {
    let runner = host_with(&["distrobox", "gnome-terminal"]);
    let checks = run_doctor(&gateway(&runner), &FixedScript("/s.sh"), Sandbox::Host).await;
    assert!(checks.terminal_found);
    let probes = runner
        .command_lines()
        .iter()
        .filter(|l| *l == "which gnome-terminal")
        .count();
    assert_eq!(probes, 1);
}

#[tokio::test]
async fn fallback_terminal_is_probed_for_presence() {
    let runner = host_with(&["distrobox"]);
    let checks = run_doctor(&gateway(&runner), &FixedScript("/s.sh"), Sandbox::Flatpak).await;
    assert_eq!(checks.sandbox, Sandbox::Flatpak);
    assert_eq!(checks.terminal, Terminal::Konsole);
    assert!(!checks.terminal_found);
    assert!(runner.command_lines().contains(&"which konsole".to_string()));
}

#[tokio::test]
async fn helper_script_failure_is_an_issue() {
    let runner = host_with(&["distrobox", "gnome-terminal"]);
    let checks = run_doctor(&gateway(&runner), &BrokenScript, Sandbox::Host).await;
    assert!(checks.helper_script.is_none());
    assert!(
        checks
            .helper_script_error
            .as_deref()
            .is_some_and(|e| e.contains("read-only"))
    );
    assert_eq!(collect_issues(&checks).len(), 1);
}

#[tokio::test]
async fn doctor_json_omits_absent_script_error() {
    let runner = host_with(&["distrobox", "gnome-terminal"]);
    let checks = run_doctor(&gateway(&runner), &FixedScript("/s.sh"), Sandbox::Host).await;
    let value = serde_json::to_value(&checks).expect("serialize");
    assert_eq!(value["sandbox"], "host");
    assert_eq!(value["terminal"], "gnome-terminal");
    assert!(value.get("helper_script_error").is_none());
}
