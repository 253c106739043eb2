//! Diagnostic output on stderr with color support.
//!
//! Provides consistent, colored messages with actionable suggestions.
//! Format: ✖ Error Type / ⚠ Warning / ℹ Info, then × Detail / help: Suggestion

use std::io::Write;

use super::ColorMode;
use super::ansi;

/// Diagnostic formatter for stderr.
#[derive(Debug, Clone, Copy)]
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a formatter honouring `mode` for stderr.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_on_stderr(),
        }
    }

    /// Creates an error output formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Prints an error with optional detail and suggestion.
    ///
    /// Format: `✖ {error_type}: {message}`
    ///         `  × {detail}` (optional)
    ///         `  help: {suggestion}` (optional)
    pub fn print_error(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    /// Prints a warning with optional detail.
    pub fn print_warning(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail);
    }

    /// Prints an informational line.
    pub fn print_info(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_info(&mut stderr, message);
    }

    /// Writes error to a writer (for testing).
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Failing to write a diagnostic to stderr cannot be reported anywhere.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_detail(w, detail);

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Writes warning to a writer (for testing).
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        self.write_detail(w, detail);
    }

    /// Writes an informational line to a writer (for testing).
    pub fn write_info<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(w, "{}ℹ{} {message}", ansi::CYAN, ansi::RESET);
        } else {
            let _ = writeln!(w, "ℹ {message}");
        }
    }

    fn write_detail<W: Write>(&self, w: &mut W, detail: Option<&str>) {
        let Some(d) = detail else {
            return;
        };
        if self.use_colors {
            let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "  × {d}");
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
