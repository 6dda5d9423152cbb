//! Domain types and validators for BoxBuddy configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::terminal::TerminalPreference;

// ── Constants ────────────────────────────────────────────────────────────────

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_VAR: &str = "BOXBUDDY_CONFIG";

pub const VALID_CONFIG_KEYS: &[&str] = &["terminal", "create.init"];
pub const VALID_TERMINALS: &[&str] = &["auto", "gnome-terminal", "konsole"];
pub const VALID_BOOLS: &[&str] = &["true", "false"];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `<config dir>/boxbuddy/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxBuddyConfig {
    /// Terminal emulator: `auto` (default), `gnome-terminal`, or `konsole`.
    pub terminal: String,
    /// Box creation settings.
    pub create: CreateConfig,
}

impl Default for BoxBuddyConfig {
    fn default() -> Self {
        Self {
            terminal: "auto".to_string(),
            create: CreateConfig::default(),
        }
    }
}

impl BoxBuddyConfig {
    #[must_use]
    pub fn terminal_preference(&self) -> TerminalPreference {
        TerminalPreference::from_config(&self.terminal)
    }
}

/// Box creation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateConfig {
    /// Run a throwaway `distrobox enter` after creation so the first
    /// interactive entry does not have to wait for setup.
    pub init: bool,
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let valid = match key {
        "terminal" => VALID_TERMINALS,
        "create.init" => VALID_BOOLS,
        _ => return Ok(()),
    };
    if !valid.contains(&value) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            valid: valid.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validate `key`/`value` and write the value into `config`.
///
/// # Errors
///
/// Returns an error if the key is unknown or the value is invalid for it.
pub fn apply_setting(config: &mut BoxBuddyConfig, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;
    match key {
        "terminal" => config.terminal = value.to_string(),
        "create.init" => config.create.init = value == "true",
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
