mod error_output;
mod json;
mod progress;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonExporter;
pub use progress::AnalysisProgress;
pub use text::TextReporter;

use std::io::IsTerminal;

use crate::analyzer::AnalysisResult;
use crate::error::Result;

/// Trait for formatting analysis results into various output formats.
pub trait OutputFormatter {
    /// Format the analysis results into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, results: &[AnalysisResult]) -> Result<String>;
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Whether to emit ANSI colors on stdout.
    #[must_use]
    pub fn use_colors_on_stdout(self) -> bool {
        self.resolve(std::io::stdout().is_terminal())
    }

    /// Whether to emit ANSI colors on stderr.
    #[must_use]
    pub fn use_colors_on_stderr(self) -> bool {
        self.resolve(std::io::stderr().is_terminal())
    }

    fn resolve(self, is_tty: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // Per <https://no-color.org>: presence of the variable disables color.
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_tty,
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
