//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Box errors ────────────────────────────────────────────────────────────────

/// Errors related to distrobox availability and box naming.
#[derive(Debug, Error)]
pub enum BoxError {
    #[error("Distrobox not found. Please ensure it is installed and on your PATH.")]
    DistroboxNotInstalled,

    #[error("Box name cannot be empty.")]
    EmptyName,

    #[error("Image cannot be empty. List available images with: boxbuddy images")]
    EmptyImage,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
