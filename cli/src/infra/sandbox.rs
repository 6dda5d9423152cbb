//! Process-wide sandbox detection.
//!
//! Computed once on first use and memoized; the answer cannot change while
//! the process runs.

use std::path::Path;
use std::sync::OnceLock;

use crate::domain::sandbox::{FLATPAK_ID_VAR, FLATPAK_MARKER, HostEscape, Sandbox};

static SANDBOX: OnceLock<Sandbox> = OnceLock::new();

/// The sandbox mode of this process.
pub fn current() -> Sandbox {
    *SANDBOX.get_or_init(|| {
        let sandbox = detect();
        tracing::debug!(?sandbox, "sandbox detected");
        sandbox
    })
}

/// Host escape matching [`current`].
pub fn host_escape() -> HostEscape {
    HostEscape::new(current())
}

/// Read the environment signals without memoizing.
#[must_use]
pub fn detect() -> Sandbox {
    let flatpak_id = std::env::var(FLATPAK_ID_VAR).ok();
    Sandbox::from_signals(flatpak_id.as_deref(), Path::new(FLATPAK_MARKER).exists())
}
