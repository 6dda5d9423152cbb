//! Integration tests for `boxbuddy config`.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn boxbuddy(config: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("boxbuddy"));
    cmd.env("NO_COLOR", "1").env("BOXBUDDY_CONFIG", config);
    cmd
}

#[test]
fn test_config_show_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    boxbuddy(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("terminal:"))
        .stdout(predicate::str::contains("auto"))
        .stdout(predicate::str::contains("create.init:"));
}

#[test]
fn test_config_set_then_show_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    boxbuddy(&path)
        .args(["config", "set", "terminal", "konsole"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set terminal = konsole"));

    let assert = boxbuddy(&path)
        .args(["config", "show", "--json"])
        .assert()
        .success();
    let v: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(v["config"]["terminal"], "konsole");
    assert_eq!(v["config"]["create"]["init"], false);
}

#[test]
fn test_config_set_writes_yaml_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    boxbuddy(&path)
        .args(["config", "set", "create.init", "true"])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).expect("config written");
    assert!(content.contains("init: true"), "got: {content}");
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    boxbuddy(&path)
        .args(["config", "set", "color", "blue"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown setting: color"));
    assert!(!path.exists());
}

#[test]
fn test_config_set_invalid_value_json_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    let assert = boxbuddy(&path)
        .args(["config", "set", "terminal", "xterm", "--json"])
        .assert()
        .code(1);
    let v: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "INVALID_CONFIG_VALUE");
}
