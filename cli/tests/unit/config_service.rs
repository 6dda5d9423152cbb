//! Config service and YAML store.

#![allow(unsafe_code)] // env mutation in #[serial] tests

use boxbuddy_cli::application::ports::ConfigStore;
use boxbuddy_cli::application::services::config_service::{load_config, set_value};
use boxbuddy_cli::domain::error::ConfigError;
use boxbuddy_cli::domain::terminal::{Terminal, TerminalPreference};
use boxbuddy_cli::infra::config::YamlConfigStore;
use serial_test::serial;

fn temp_store() -> (tempfile::TempDir, YamlConfigStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = YamlConfigStore::at(dir.path().join("config.yaml"));
    (dir, store)
}

#[test]
fn set_terminal_persists_and_pins_preference() {
    let (_dir, store) = temp_store();
    let config = set_value(&store, "terminal", "konsole").expect("set");
    assert_eq!(
        config.terminal_preference(),
        TerminalPreference::Fixed(Terminal::Konsole)
    );
    assert_eq!(load_config(&store).expect("load").terminal, "konsole");
}

#[test]
fn set_create_init_persists_bool() {
    let (_dir, store) = temp_store();
    set_value(&store, "create.init", "true").expect("set");
    assert!(load_config(&store).expect("load").create.init);
}

#[test]
fn set_unknown_key_is_rejected_without_writing() {
    let (_dir, store) = temp_store();
    let err = set_value(&store, "security.level", "high").expect_err("unknown");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::UnknownKey { .. })
    ));
    assert!(!store.path().expect("path").exists());
}

#[test]
fn set_invalid_value_is_rejected() {
    let (_dir, store) = temp_store();
    let err = set_value(&store, "terminal", "xterm").expect_err("invalid");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn settings_accumulate_across_calls() {
    let (_dir, store) = temp_store();
    set_value(&store, "terminal", "gnome-terminal").expect("set terminal");
    set_value(&store, "create.init", "true").expect("set init");
    let config = load_config(&store).expect("load");
    assert_eq!(config.terminal, "gnome-terminal");
    assert!(config.create.init);
}

#[test]
#[serial]
fn env_override_selects_config_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.yaml");
    unsafe {
        std::env::set_var("BOXBUDDY_CONFIG", &path);
    }
    let resolved = YamlConfigStore::new().path();
    unsafe {
        std::env::remove_var("BOXBUDDY_CONFIG");
    }
    assert_eq!(resolved.expect("path"), path);
}

#[test]
#[serial]
fn explicit_path_wins_over_env_override() {
    let dir = tempfile::tempdir().expect("tempdir");
    unsafe {
        std::env::set_var("BOXBUDDY_CONFIG", dir.path().join("env.yaml"));
    }
    let store = YamlConfigStore::at(dir.path().join("explicit.yaml"));
    let resolved = store.path();
    unsafe {
        std::env::remove_var("BOXBUDDY_CONFIG");
    }
    assert_eq!(resolved.expect("path"), dir.path().join("explicit.yaml"));
}
