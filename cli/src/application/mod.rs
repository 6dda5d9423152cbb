//! Application layer — port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain` — never on `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod offload;
pub mod ports;
pub mod services;

pub use offload::{OffloadError, Pending, offload};
pub use ports::{
    BoxExecutor, BoxInspector, BoxLifecycle, BoxSession, CapturedOutput, CommandRunner,
    ConfigStore, CreateSpec, ScriptInstaller, ToolProbe,
};
