//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::config::BoxBuddyConfig;
use crate::domain::terminal::{ResolvedTerminal, Terminal};

// ── Value Types ───────────────────────────────────────────────────────────────

/// Decoded output of a finished child process.
///
/// The exit code is deliberately not carried: distrobox reports failures
/// inconsistently across hosts, so callers look at the text only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// Decode raw process output as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn from_bytes(stdout: &[u8], stderr: &[u8]) -> Self {
        Self {
            stdout: String::from_utf8_lossy(stdout).into_owned(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
        }
    }
}

/// Parameters for `distrobox create`.
pub struct CreateSpec<'a> {
    /// Box name, already sanitised by the caller.
    pub name: &'a str,
    /// Image reference, e.g. `"docker.io/library/ubuntu:22.04"`.
    pub image: &'a str,
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// Implementations apply the host-escape prefix; callers always pass the
/// plain program name.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture both output streams.
    ///
    /// A non-zero exit code is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process cannot be spawned or waited on.
    async fn run_captured(&self, program: &str, args: &[&str]) -> Result<CapturedOutput>;

    /// Spawn a program without waiting for it or capturing its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn run_detached(&self, program: &str, args: &[&str]) -> Result<()>;
}

// ── Distrobox Port Traits ─────────────────────────────────────────────────────

/// Read-only queries against distrobox.
#[allow(async_fn_in_trait)]
pub trait BoxInspector {
    /// Run `distrobox list --no-color`.
    async fn list(&self) -> Result<CapturedOutput>;
    /// Run `distrobox create -C` (base image catalog).
    async fn image_catalog(&self) -> Result<CapturedOutput>;
}

/// Box lifecycle: create, initialise, remove.
#[allow(async_fn_in_trait)]
pub trait BoxLifecycle {
    /// Run `distrobox create -n <name> -i <image> -Y`.
    async fn create(&self, spec: &CreateSpec<'_>) -> Result<CapturedOutput>;
    /// Run `setsid distrobox enter <name> -- ls` to finish first-run setup.
    async fn init(&self, name: &str) -> Result<CapturedOutput>;
    /// Run `distrobox rm <name> -f`.
    async fn remove(&self, name: &str) -> Result<CapturedOutput>;
}

/// Interactive sessions opened in a terminal emulator.
#[allow(async_fn_in_trait)]
pub trait BoxSession {
    /// Resolve the terminal emulator to launch sessions in.
    async fn terminal(&self) -> ResolvedTerminal;
    /// Open a terminal running `distrobox enter <name>`. Returns the emulator used.
    async fn enter(&self, name: &str) -> Result<Terminal>;
    /// Open a terminal running `distrobox upgrade <name>`. Returns the emulator used.
    async fn upgrade(&self, name: &str) -> Result<Terminal>;
}

/// Commands run inside a box via `distrobox enter <name> -- …`.
#[allow(async_fn_in_trait)]
pub trait BoxExecutor {
    /// Run a command inside the box and capture its output.
    async fn exec(&self, name: &str, args: &[&str]) -> Result<CapturedOutput>;
    /// Start a command inside the box without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn launch(&self, name: &str, args: &[&str]) -> Result<()>;
}

/// `PATH` lookups on the host.
#[allow(async_fn_in_trait)]
pub trait ToolProbe {
    /// Run `which <program>`.
    async fn which(&self, program: &str) -> Result<CapturedOutput>;
}

// ── Helper Script Port ────────────────────────────────────────────────────────

/// Places the app-listing helper script where containers can execute it.
pub trait ScriptInstaller {
    /// Install (or refresh) the script and return its absolute path.
    ///
    /// Must be idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the target directory or file cannot be written.
    fn install(&self) -> Result<PathBuf>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<BoxBuddyConfig>;
    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &BoxBuddyConfig) -> Result<()>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    fn path(&self) -> Result<PathBuf>;
}
