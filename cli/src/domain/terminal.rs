//! Terminal emulators used for interactive sessions.

use serde::Serialize;

/// A supported terminal emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Terminal {
    GnomeTerminal,
    Konsole,
}

impl Terminal {
    /// Emulator probed first; the other one is the fallback.
    pub const PRIMARY: Self = Self::GnomeTerminal;

    /// Executable name.
    #[must_use]
    pub fn program(self) -> &'static str {
        match self {
            Self::GnomeTerminal => "gnome-terminal",
            Self::Konsole => "konsole",
        }
    }

    /// Flag that makes the emulator run the following command.
    #[must_use]
    pub fn exec_flag(self) -> &'static str {
        match self {
            Self::GnomeTerminal => "--",
            Self::Konsole => "-e",
        }
    }

    /// The emulator used when [`Terminal::PRIMARY`] is not installed.
    #[must_use]
    pub fn fallback(self) -> Self {
        match self {
            Self::GnomeTerminal => Self::Konsole,
            Self::Konsole => Self::GnomeTerminal,
        }
    }
}

/// The emulator to launch, and whether a `PATH` probe already found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTerminal {
    pub terminal: Terminal,
    /// Set only when `which` reported this exact emulator as present.
    pub confirmed: bool,
}

impl ResolvedTerminal {
    /// A choice made without probing.
    #[must_use]
    pub fn unprobed(terminal: Terminal) -> Self {
        Self {
            terminal,
            confirmed: false,
        }
    }
}

/// Which terminal to use, from the `terminal` config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalPreference {
    /// Probe `PATH` for the primary emulator, fall back to the other.
    #[default]
    Auto,
    /// Always use this emulator without probing.
    Fixed(Terminal),
}

impl TerminalPreference {
    /// Interpret a config value. Unknown values mean [`TerminalPreference::Auto`].
    #[must_use]
    pub fn from_config(value: &str) -> Self {
        match value {
            "gnome-terminal" => Self::Fixed(Terminal::GnomeTerminal),
            "konsole" => Self::Fixed(Terminal::Konsole),
            _ => Self::Auto,
        }
    }
}
