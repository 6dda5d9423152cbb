//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation. It owns the
//! process-wide [`HostEscape`] so the `flatpak-spawn --host` prefix is
//! applied in exactly one place.

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::application::ports::{CapturedOutput, CommandRunner};
use crate::domain::sandbox::HostEscape;

/// Production `CommandRunner` backed by `tokio::process`.
///
/// Captured runs wait for the child with no timeout: distrobox operations
/// such as image pulls legitimately take minutes.
#[derive(Debug, Clone, Copy)]
pub struct TokioCommandRunner {
    escape: HostEscape,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(escape: HostEscape) -> Self {
        Self { escape }
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run_captured(&self, program: &str, args: &[&str]) -> Result<CapturedOutput> {
        let (program, args) = self.escape.wrap(program, args);
        tracing::debug!(program, ?args, "running command");

        let mut child = tokio::process::Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        let (status, stdout, stderr) = tokio::join!(
            child.wait(),
            drain(stdout_handle.as_mut(), program, "stdout"),
            drain(stderr_handle.as_mut(), program, "stderr"),
        );
        let status = status.with_context(|| format!("waiting for {program}"))?;

        tracing::trace!(
            program,
            code = ?status.code(),
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            "command finished"
        );
        Ok(CapturedOutput::from_bytes(&stdout, &stderr))
    }

    fn run_detached(&self, program: &str, args: &[&str]) -> Result<()> {
        let (program, args) = self.escape.wrap(program, args);
        tracing::debug!(program, ?args, "launching detached command");

        let mut cmd = tokio::process::Command::new(program);
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        // Own process group: the session must survive the launching shell.
        #[cfg(unix)]
        cmd.process_group(0);

        // Dropping the handle leaves the child running; tokio reaps it.
        cmd.spawn()
            .with_context(|| format!("failed to spawn {program}"))?;
        Ok(())
    }
}

/// Read a child pipe to the end. A read error keeps what arrived so far.
async fn drain<H: AsyncRead + Unpin>(handle: Option<&mut H>, program: &str, stream: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(h) = handle {
        if let Err(e) = h.read_to_end(&mut buf).await {
            tracing::debug!(program, stream, error = %e, read = buf.len(), "pipe read failed");
        }
    }
    buf
}
