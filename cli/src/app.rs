//! Application context — unified state passed to every command handler.
//!
//! `AppContext` is built once in `Cli::run()` and bundles output settings,
//! the distrobox gateway, the helper-script installer and the loaded config.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::BoxBuddyConfig;
use crate::domain::sandbox::Sandbox;
use crate::infra::assets::HelperScript;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::distrobox::DistroboxCli;
use crate::infra::sandbox;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Environment variable that answers every confirmation with its default.
pub const YES_VAR: &str = "BOXBUDDY_YES";

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
    /// Show extra detail (doctor issues, debug logs).
    pub verbose: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `BOXBUDDY_YES` env vars).
    pub yes: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Whether `--verbose` was passed.
    pub verbose: bool,
    /// Distrobox gateway.
    pub gateway: DistroboxCli<TokioCommandRunner>,
    /// App-listing helper installer.
    pub scripts: HelperScript,
    /// Config persistence.
    pub config_store: YamlConfigStore,
    /// Config as loaded at startup.
    pub config: BoxBuddyConfig,
    /// Sandbox mode of this process.
    pub sandbox: Sandbox,
    /// When `true`, skip interactive prompts and use defaults.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `BOXBUDDY_YES`
    /// environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// An unreadable config file falls back to defaults so that every
    /// command except `config` keeps working.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let ci_env = std::env::var("CI").is_ok() || std::env::var(YES_VAR).is_ok();
        let non_interactive = flags.behaviour.yes || ci_env;

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let config_store = YamlConfigStore::new();
        let config = config_store.load().unwrap_or_else(|e| {
            tracing::warn!("ignoring unreadable config: {e:#}");
            BoxBuddyConfig::default()
        });
        let sandbox = sandbox::current();

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            verbose: flags.output.verbose,
            gateway: DistroboxCli::default_runner(config.terminal_preference()),
            scripts: HelperScript::for_sandbox(sandbox),
            config_store,
            config,
            sandbox,
            non_interactive,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI, `--yes` flag, or `BOXBUDDY_YES` env),
    /// returns `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
