//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips the ANSI codes when the
//! stream is not a color-capable terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark for completed steps
pub const CHECK: &str = "✓";

/// Semantic styles for CLI output
pub trait Stylize: Display + Sized {
    /// De-emphasized text
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    /// Headings and labels
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    /// Branch names, URLs, hashes
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    /// Successful outcomes
    fn success(&self) -> String {
        self.green().to_string()
    }

    /// Failures
    fn failure(&self) -> String {
        self.red().bold().to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Styled arrow for "from -> to"
pub fn arrow() -> String {
    "→".muted()
}

/// Styled check mark
pub fn check() -> String {
    CHECK.success()
}
