//! Integration tests for argument parsing, help and version output.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn boxbuddy() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("boxbuddy"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    boxbuddy().assert().code(2).stderr(predicate::str::contains(
        "Manage distrobox containers from the command line",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    let assert = boxbuddy().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for cmd in [
        "list", "create", "delete", "enter", "upgrade", "apps", "images", "doctor", "config",
        "version",
    ] {
        assert!(stdout.contains(cmd), "help should mention {cmd}:\n{stdout}");
    }
}

#[test]
fn test_cli_version_flag_shows_version() {
    boxbuddy()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("boxbuddy"));
}

#[test]
fn test_version_command_shows_version() {
    boxbuddy()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_command_json() {
    let assert = boxbuddy().args(["version", "--json"]).assert().success();
    let v: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_no_color_env_accepts_conventional_values() {
    for value in ["1", "true", "yes", ""] {
        boxbuddy()
            .env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_no_color_flag_still_parses() {
    boxbuddy()
        .args(["--no-color", "version"])
        .assert()
        .success();
}

#[test]
fn test_unknown_command_fails() {
    boxbuddy()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_create_requires_image() {
    boxbuddy()
        .args(["create", "mybox"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--image"));
}

#[test]
fn test_apps_requires_subcommand() {
    boxbuddy().arg("apps").assert().code(2);
}
