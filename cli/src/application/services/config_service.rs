//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{BoxBuddyConfig, apply_setting};

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the config file exists but is unreadable.
pub fn load_config(store: &impl ConfigStore) -> Result<BoxBuddyConfig> {
    store.load()
}

/// Validate and persist a single `key = value` setting.
///
/// # Errors
///
/// Returns an error if the key/value is invalid or the file cannot be written.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<BoxBuddyConfig> {
    let mut config = store.load()?;
    apply_setting(&mut config, key, value)?;
    store.save(&config)?;
    tracing::debug!(key, value, "config updated");
    Ok(config)
}
