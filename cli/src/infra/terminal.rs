//! Terminal-emulator detection.

use crate::application::ports::CommandRunner;
use crate::domain::probe::tool_present;
use crate::domain::terminal::{ResolvedTerminal, Terminal, TerminalPreference};

/// Pick the terminal emulator: the primary one if `which` finds it,
/// otherwise the fallback. The fallback itself is not probed.
pub async fn detect_terminal(runner: &impl CommandRunner) -> ResolvedTerminal {
    let primary = Terminal::PRIMARY;
    let found = match runner.run_captured("which", &[primary.program()]).await {
        Ok(out) => tool_present(primary.program(), &out.stdout, &out.stderr),
        Err(e) => {
            tracing::debug!(error = %e, "terminal probe failed");
            false
        }
    };
    if found {
        ResolvedTerminal {
            terminal: primary,
            confirmed: true,
        }
    } else {
        tracing::debug!(fallback = primary.fallback().program(), "primary terminal not found");
        ResolvedTerminal::unprobed(primary.fallback())
    }
}

/// Apply the configured preference, probing only for `auto`.
pub async fn resolve_terminal(
    pref: TerminalPreference,
    runner: &impl CommandRunner,
) -> ResolvedTerminal {
    match pref {
        TerminalPreference::Fixed(terminal) => ResolvedTerminal::unprobed(terminal),
        TerminalPreference::Auto => detect_terminal(runner).await,
    }
}
