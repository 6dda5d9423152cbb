//! Human-readable terminal renderer.

use std::path::Path;

use boxbuddy_common::{ContainerRecord, ImageCandidate, LocalAppRecord, display_name};
use owo_colors::OwoColorize as _;

use crate::domain::config::{BoxBuddyConfig, CONFIG_PATH_VAR};
use crate::domain::health::DoctorChecks;
use crate::domain::sandbox::Sandbox;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the box list as a table with a coloured distro bullet.
    pub fn render_containers(&self, boxes: &[ContainerRecord]) {
        if boxes.is_empty() {
            self.ctx.info("No boxes yet.");
            println!("\nCreate one: boxbuddy create <name> --image <image>");
            return;
        }
        let name_w = column_width("NAME", boxes.iter().map(|b| b.name.as_str()));
        let distro_w = column_width("DISTRO", boxes.iter().map(|b| display_name(&b.distro)));
        let status_w = column_width("STATUS", boxes.iter().map(|b| b.status.as_str()));

        println!(
            "    {:<name_w$}  {:<distro_w$}  {:<status_w$}  {}",
            "NAME".style(self.ctx.styles.bold),
            "DISTRO".style(self.ctx.styles.bold),
            "STATUS".style(self.ctx.styles.bold),
            "IMAGE".style(self.ctx.styles.bold),
        );
        for b in boxes {
            println!(
                "  {} {:<name_w$}  {:<distro_w$}  {:<status_w$}  {}",
                "●".style(self.ctx.styles.distro(&b.distro)),
                b.name,
                display_name(&b.distro),
                b.status,
                b.image_url.style(self.ctx.styles.dim),
            );
        }
    }

    /// Render the apps found inside a box.
    pub fn render_apps(&self, name: &str, apps: &[LocalAppRecord]) {
        if apps.is_empty() {
            self.ctx.info(&format!("No applications found in {name}."));
            return;
        }
        self.ctx.header(&format!("Applications in {name}:"));
        println!();
        let name_w = column_width("NAME", apps.iter().map(|a| a.name.as_str()));
        for app in apps {
            println!(
                "    {:<name_w$}  {}  {}",
                app.name,
                app.exec,
                app.desktop_file.style(self.ctx.styles.dim),
            );
        }
        println!();
        println!("Export one: boxbuddy apps export {name} <desktop-file>");
    }

    /// Render the base-image catalog, one label per line.
    pub fn render_images(&self, images: &[ImageCandidate]) {
        if images.is_empty() {
            self.ctx.warn("distrobox returned no images.");
            return;
        }
        for image in images {
            println!(
                "  {} {}",
                "●".style(self.ctx.styles.distro(&image.distro)),
                image.label()
            );
        }
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &BoxBuddyConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<20} {}", "terminal:", config.terminal);
        println!("  {:<20} {}", "create.init:", config.create.init);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in [CONFIG_PATH_VAR, "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    /// Render doctor health check results.
    pub fn render_doctor(&self, checks: &DoctorChecks, issues: &[String], verbose: bool) {
        println!();
        println!("  {}", "BoxBuddy Health Check".style(self.ctx.styles.header));
        println!();

        println!("  Environment:");
        match checks.sandbox {
            Sandbox::Host => self.print_check(true, "running on the host"),
            Sandbox::Flatpak => {
                self.print_check(true, "running in Flatpak (commands use flatpak-spawn --host)");
            }
        }
        println!();

        println!("  Prerequisites:");
        if checks.distrobox_found {
            let path = checks.distrobox_path.as_deref().unwrap_or("on PATH");
            self.print_check(true, &format!("distrobox ({path})"));
        } else {
            self.print_check(false, "distrobox not found");
            println!("      Install: https://distrobox.it/#installation");
        }
        self.print_check(
            checks.terminal_found,
            &format!("terminal: {}", checks.terminal.program()),
        );
        println!();

        println!("  Helper script:");
        match (&checks.helper_script, &checks.helper_script_error) {
            (Some(path), _) => self.print_check(true, path),
            (None, Some(e)) => self.print_check(false, e),
            (None, None) => self.print_check(false, "not installed"),
        }

        println!();
        if issues.is_empty() {
            println!(
                "  {} Everything looks good!",
                "\u{2713}".style(self.ctx.styles.success)
            );
        } else {
            let hint = if verbose {
                ""
            } else {
                " Run with --verbose for details."
            };
            println!(
                "  {} Found {} issues.{hint}",
                "\u{2717}".style(self.ctx.styles.error),
                issues.len(),
            );
            if verbose {
                println!();
                for issue in issues {
                    println!("    {} {issue}", "\u{2717}".style(self.ctx.styles.error));
                }
            }
        }
        println!();
    }

    fn print_check(&self, ok: bool, msg: &str) {
        if ok {
            println!("    {} {msg}", "\u{2713}".style(self.ctx.styles.success));
        } else {
            println!("    {} {msg}", "\u{2717}".style(self.ctx.styles.error));
        }
    }
}

// ── Display helpers ──────────────────────────────────────────────────────────

/// Widest cell in a column, header included.
#[must_use]
pub fn column_width<S: AsRef<str>>(header: &str, cells: impl Iterator<Item = S>) -> usize {
    cells
        .map(|c| c.as_ref().chars().count())
        .fold(header.len(), usize::max)
}
