//! Domain layer — pure parsing, naming rules, and configuration schema.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod health;
pub mod listing;
pub mod naming;
pub mod probe;
pub mod sandbox;
pub mod terminal;

pub use config::{BoxBuddyConfig, apply_setting, validate_config_key, validate_config_value};
pub use error::{BoxError, ConfigError};
pub use health::{DoctorChecks, collect_issues};
pub use sandbox::{HostEscape, Sandbox};
pub use terminal::{Terminal, TerminalPreference};
