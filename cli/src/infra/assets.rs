//! Embedded assets and the helper-script installer.
//!
//! At compile time, `include_dir!` embeds everything under `assets/`:
//!   - `boxbuddy-list-local-apps.sh` — run inside a box to list its desktop entries

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use include_dir::{Dir, include_dir};

use crate::application::ports::ScriptInstaller;
use crate::domain::sandbox::Sandbox;

static EMBEDDED_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// File name of the app-listing helper script.
pub const LIST_APPS_SCRIPT: &str = "boxbuddy-list-local-apps.sh";

/// Return the raw bytes of a single embedded asset without extracting to disk.
///
/// # Errors
///
/// Returns an error if no asset with the given `name` exists.
pub fn get_asset(name: &str) -> Result<&'static [u8]> {
    EMBEDDED_ASSETS
        .get_file(name)
        .map(|f| f.contents())
        .ok_or_else(|| anyhow::anyhow!("embedded asset not found: {name}"))
}

/// Directory the helper script is installed into.
///
/// Sandboxed, the app's `XDG_DATA_HOME` is used because it lives under the
/// user's home and is therefore visible inside boxes. On the host the
/// platform data dir gets a `boxbuddy` subdirectory.
#[must_use]
pub fn script_dir(
    sandbox: Sandbox,
    xdg_data_home: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if sandbox.is_sandboxed() {
        xdg_data_home.filter(|p| !p.as_os_str().is_empty()).or(data_dir)
    } else {
        data_dir.map(|d| d.join("boxbuddy"))
    }
}

/// Installs the embedded app-listing script.
#[derive(Debug, Clone)]
pub struct HelperScript {
    dir: Option<PathBuf>,
}

impl HelperScript {
    /// Installer for the current process environment.
    #[must_use]
    pub fn for_sandbox(sandbox: Sandbox) -> Self {
        let xdg = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from);
        Self {
            dir: script_dir(sandbox, xdg, dirs::data_dir()),
        }
    }

    /// Installer writing into a fixed directory.
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Target path of the script, without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory could be determined.
    pub fn path(&self) -> Result<PathBuf> {
        self.dir
            .as_ref()
            .map(|d| d.join(LIST_APPS_SCRIPT))
            .ok_or_else(|| anyhow::anyhow!("cannot determine data directory"))
    }
}

impl ScriptInstaller for HelperScript {
    fn install(&self) -> Result<PathBuf> {
        let path = self.path()?;
        let contents = get_asset(LIST_APPS_SCRIPT)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        if !is_current(&path, contents) {
            std::fs::write(&path, contents)
                .with_context(|| format!("cannot write {}", path.display()))?;
            tracing::debug!(path = %path.display(), "helper script written");
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o744))
                .with_context(|| format!("cannot set permissions on {}", path.display()))?;
        }
        Ok(path)
    }
}

fn is_current(path: &Path, contents: &[u8]) -> bool {
    std::fs::read(path).is_ok_and(|existing| existing == contents)
}
