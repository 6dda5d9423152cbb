//! JSON output helpers.
//!
//! `JsonRenderer` prints every result as pretty JSON on stdout; `format_error`
//! builds the error object printed by `main` when a command fails under
//! `--json`.

use anyhow::{Context, Result};
use boxbuddy_common::{ContainerRecord, ImageCandidate, LocalAppRecord};
use serde::Serialize;

use crate::application::offload::OffloadError;
use crate::domain::config::BoxBuddyConfig;
use crate::domain::error::{BoxError, ConfigError};
use crate::domain::health::DoctorChecks;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable machine-readable code for an error chain.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<BoxError>() {
        return match e {
            BoxError::DistroboxNotInstalled => "DISTROBOX_NOT_FOUND",
            BoxError::EmptyName => "EMPTY_NAME",
            BoxError::EmptyImage => "EMPTY_IMAGE",
        };
    }
    if let Some(e) = err.downcast_ref::<ConfigError>() {
        return match e {
            ConfigError::UnknownKey { .. } => "UNKNOWN_CONFIG_KEY",
            ConfigError::InvalidValue { .. } => "INVALID_CONFIG_VALUE",
        };
    }
    if err.downcast_ref::<OffloadError>().is_some() {
        return "WORKER_LOST";
    }
    "COMMAND_FAILED"
}

/// Renders results as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print(value: &impl Serialize) -> Result<()> {
        let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }

    /// Render the box list as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_containers(&self, boxes: &[ContainerRecord]) -> Result<()> {
        Self::print(&boxes)
    }

    /// Render `{"box": ..., "apps": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_apps(&self, name: &str, apps: &[LocalAppRecord]) -> Result<()> {
        Self::print(&serde_json::json!({ "box": name, "apps": apps }))
    }

    /// Render the catalog; each entry carries its display label.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_images(&self, images: &[ImageCandidate]) -> Result<()> {
        let entries: Vec<_> = images
            .iter()
            .map(|i| {
                serde_json::json!({
                    "image": i.image,
                    "distro": i.distro,
                    "label": i.label(),
                })
            })
            .collect();
        Self::print(&entries)
    }

    /// Render `{"checks": ..., "issues": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_doctor(&self, checks: &DoctorChecks, issues: &[String]) -> Result<()> {
        Self::print(&serde_json::json!({ "checks": checks, "issues": issues }))
    }

    /// Render `{"path": ..., "config": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(&self, config: &BoxBuddyConfig, path: &std::path::Path) -> Result<()> {
        Self::print(&serde_json::json!({ "path": path, "config": config }))
    }
}
