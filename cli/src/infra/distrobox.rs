//! Infrastructure implementation of the distrobox port traits.
//!
//! `DistroboxCli<R>` builds every `distrobox` argument vector and routes it
//! through a `CommandRunner`. It never parses output; that is the job of the
//! application services.

use anyhow::{Context, Result};

use crate::application::ports::{
    BoxExecutor, BoxInspector, BoxLifecycle, BoxSession, CapturedOutput, CommandRunner,
    CreateSpec, ToolProbe,
};
use crate::domain::terminal::{ResolvedTerminal, Terminal, TerminalPreference};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::sandbox;
use crate::infra::terminal::resolve_terminal;

const DISTROBOX: &str = "distrobox";

/// Infrastructure adapter that routes all distrobox CLI calls through a `CommandRunner`.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
#[derive(Debug, Clone)]
pub struct DistroboxCli<R: CommandRunner> {
    runner: R,
    terminal: TerminalPreference,
}

impl<R: CommandRunner> DistroboxCli<R> {
    /// Create a gateway over an explicit runner.
    pub fn new(runner: R, terminal: TerminalPreference) -> Self {
        Self { runner, terminal }
    }

    /// `distrobox enter <name> -- <args…>`
    fn enter_args<'a>(name: &'a str, args: &[&'a str]) -> Vec<&'a str> {
        let mut full = vec!["enter", name, "--"];
        full.extend_from_slice(args);
        full
    }

    /// Open `distrobox <args…>` in a detached terminal.
    async fn in_terminal(&self, args: &[&str]) -> Result<Terminal> {
        let terminal = self.terminal().await.terminal;
        let mut full = vec![terminal.exec_flag(), DISTROBOX];
        full.extend_from_slice(args);
        self.runner
            .run_detached(terminal.program(), &full)
            .with_context(|| format!("opening {}", terminal.program()))?;
        Ok(terminal)
    }
}

impl DistroboxCli<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner(terminal: TerminalPreference) -> Self {
        Self::new(TokioCommandRunner::new(sandbox::host_escape()), terminal)
    }
}

impl<R: CommandRunner> BoxInspector for DistroboxCli<R> {
    async fn list(&self) -> Result<CapturedOutput> {
        self.runner
            .run_captured(DISTROBOX, &["list", "--no-color"])
            .await
            .context("distrobox list")
    }

    async fn image_catalog(&self) -> Result<CapturedOutput> {
        self.runner
            .run_captured(DISTROBOX, &["create", "-C"])
            .await
            .context("distrobox create -C")
    }
}

impl<R: CommandRunner> BoxLifecycle for DistroboxCli<R> {
    async fn create(&self, spec: &CreateSpec<'_>) -> Result<CapturedOutput> {
        self.runner
            .run_captured(DISTROBOX, &["create", "-n", spec.name, "-i", spec.image, "-Y"])
            .await
            .context("distrobox create")
    }

    async fn init(&self, name: &str) -> Result<CapturedOutput> {
        self.runner
            .run_captured("setsid", &[DISTROBOX, "enter", name, "--", "ls"])
            .await
            .context("distrobox enter (init)")
    }

    async fn remove(&self, name: &str) -> Result<CapturedOutput> {
        self.runner
            .run_captured(DISTROBOX, &["rm", name, "-f"])
            .await
            .context("distrobox rm")
    }
}

impl<R: CommandRunner> BoxSession for DistroboxCli<R> {
    async fn terminal(&self) -> ResolvedTerminal {
        resolve_terminal(self.terminal, &self.runner).await
    }

    async fn enter(&self, name: &str) -> Result<Terminal> {
        self.in_terminal(&["enter", name]).await
    }

    async fn upgrade(&self, name: &str) -> Result<Terminal> {
        self.in_terminal(&["upgrade", name]).await
    }
}

impl<R: CommandRunner> BoxExecutor for DistroboxCli<R> {
    async fn exec(&self, name: &str, args: &[&str]) -> Result<CapturedOutput> {
        self.runner
            .run_captured(DISTROBOX, &Self::enter_args(name, args))
            .await
            .context("distrobox enter")
    }

    fn launch(&self, name: &str, args: &[&str]) -> Result<()> {
        self.runner
            .run_detached(DISTROBOX, &Self::enter_args(name, args))
            .context("distrobox enter (detached)")
    }
}

impl<R: CommandRunner> ToolProbe for DistroboxCli<R> {
    async fn which(&self, program: &str) -> Result<CapturedOutput> {
        self.runner
            .run_captured("which", &[program])
            .await
            .with_context(|| format!("which {program}"))
    }
}
