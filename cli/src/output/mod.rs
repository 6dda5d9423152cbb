//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print raw tool output (trimmed, indented, dimmed). Skipped when blank or `quiet`.
    pub fn raw(&self, text: &str) {
        let text = text.trim();
        if self.quiet || text.is_empty() {
            return;
        }
        for line in text.lines() {
            println!("    {}", line.style(self.styles.dim));
        }
    }
}

/// Output renderer selected by `--json`.
pub enum Renderer<'a> {
    /// Human-readable terminal output.
    Human(HumanRenderer<'a>),
    /// Machine-readable JSON on stdout.
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the box list.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_containers(&self, boxes: &[boxbuddy_common::ContainerRecord]) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => {
                r.render_containers(boxes);
                Ok(())
            }
            Self::Json(r) => r.render_containers(boxes),
        }
    }

    /// Render the apps installed in one box.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_apps(&self, name: &str, apps: &[boxbuddy_common::LocalAppRecord]) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => {
                r.render_apps(name, apps);
                Ok(())
            }
            Self::Json(r) => r.render_apps(name, apps),
        }
    }

    /// Render the base-image catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_images(&self, images: &[boxbuddy_common::ImageCandidate]) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => {
                r.render_images(images);
                Ok(())
            }
            Self::Json(r) => r.render_images(images),
        }
    }

    /// Render doctor results.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_doctor(
        &self,
        checks: &crate::domain::health::DoctorChecks,
        issues: &[String],
        verbose: bool,
    ) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => {
                r.render_doctor(checks, issues, verbose);
                Ok(())
            }
            Self::Json(r) => r.render_doctor(checks, issues),
        }
    }

    /// Render the persisted configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(
        &self,
        config: &crate::domain::config::BoxBuddyConfig,
        path: &std::path::Path,
    ) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path),
        }
    }
}
