//! Sandbox detection rules and host-escape argument rewriting.
//!
//! Pure functions only. Reading the environment and the marker file is the
//! job of `crate::infra::sandbox`; this module decides what those signals mean.

use serde::Serialize;

/// Program used to escape a Flatpak sandbox.
pub const HOST_ESCAPE_PROGRAM: &str = "flatpak-spawn";

/// Fixed prefix prepended to every host command when sandboxed.
pub const HOST_ESCAPE_PREFIX: [&str; 2] = [HOST_ESCAPE_PROGRAM, "--host"];

/// Environment variable set by Flatpak inside the sandbox.
pub const FLATPAK_ID_VAR: &str = "FLATPAK_ID";

/// Marker file present at the root of every Flatpak sandbox.
pub const FLATPAK_MARKER: &str = "/.flatpak-info";

/// Where this process is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sandbox {
    /// Directly on the host.
    Host,
    /// Inside a Flatpak sandbox; host commands need `flatpak-spawn --host`.
    Flatpak,
}

impl Sandbox {
    /// Decide the sandbox mode from the raw environment signals.
    ///
    /// An empty `FLATPAK_ID` counts as unset.
    #[must_use]
    pub fn from_signals(flatpak_id: Option<&str>, marker_exists: bool) -> Self {
        let has_id = flatpak_id.is_some_and(|id| !id.is_empty());
        if has_id || marker_exists {
            Self::Flatpak
        } else {
            Self::Host
        }
    }

    #[must_use]
    pub fn is_sandboxed(self) -> bool {
        self == Self::Flatpak
    }
}

/// Rewrites argument vectors so that they execute on the host.
///
/// This is the only place the host-escape prefix is applied; every process
/// launch goes through a runner holding one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostEscape {
    sandbox: Sandbox,
}

impl HostEscape {
    #[must_use]
    pub fn new(sandbox: Sandbox) -> Self {
        Self { sandbox }
    }

    #[must_use]
    pub fn sandbox(&self) -> Sandbox {
        self.sandbox
    }

    /// Return the program and arguments to actually execute.
    ///
    /// On the host, or when `program` is already the escape hatch, the
    /// command is returned unchanged.
    #[must_use]
    pub fn wrap<'a>(&self, program: &'a str, args: &[&'a str]) -> (&'a str, Vec<&'a str>) {
        if !self.sandbox.is_sandboxed() || program == HOST_ESCAPE_PROGRAM {
            return (program, args.to_vec());
        }
        let mut full = Vec::with_capacity(args.len() + 2);
        full.extend_from_slice(&HOST_ESCAPE_PREFIX[1..]);
        full.push(program);
        full.extend_from_slice(args);
        (HOST_ESCAPE_PROGRAM, full)
    }
}
