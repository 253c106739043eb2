use std::fmt::Write;

use crate::analyzer::{AnalysisResult, Status};
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi};

/// Human-readable console report.
///
/// Each result is printed as a block of `ID`/`Path`/`Status`/`Message` lines
/// (plus `Error` when details exist) followed by a `---` separator.
pub struct TextReporter {
    use_colors: bool,
}

impl TextReporter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_on_stdout(),
        }
    }

    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize_status(&self, status: Status) -> String {
        if !self.use_colors {
            return status.to_string();
        }
        let color = match status {
            Status::Ok => ansi::GREEN,
            Status::Failed => ansi::RED,
        };
        format!("{color}{status}{}", ansi::RESET)
    }

    fn format_result(&self, result: &AnalysisResult, output: &mut String) {
        let _ = writeln!(output, "ID: {}", result.id);
        let _ = writeln!(output, "Path: {}", result.path.display());
        let _ = writeln!(output, "Status: {}", self.colorize_status(result.status));
        let _ = writeln!(output, "Message: {}", result.message);
        if let Some(details) = result.error_details.as_deref().filter(|d| !d.is_empty()) {
            let _ = writeln!(output, "Error: {details}");
        }
        let _ = writeln!(output, "---");
    }

    /// The closing `X/Y analyses succeeded` line.
    #[must_use]
    pub fn format_summary(&self, results: &[AnalysisResult]) -> String {
        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        let total = results.len();
        let count = if !self.use_colors {
            succeeded.to_string()
        } else if succeeded == total {
            format!("{}{succeeded}{}", ansi::GREEN, ansi::RESET)
        } else {
            format!("{}{succeeded}{}", ansi::YELLOW, ansi::RESET)
        };
        format!("{count}/{total} analyses succeeded\n")
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextReporter {
    fn format(&self, results: &[AnalysisResult]) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "Analysis results:");
        let _ = writeln!(output, "=================");
        for result in results {
            self.format_result(result, &mut output);
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
