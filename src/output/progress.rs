use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for file analysis.
///
/// The progress bar is automatically disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct AnalysisProgress {
    progress_bar: ProgressBar,
}

impl AnalysisProgress {
    /// Creates a new progress bar for `total` checks.
    ///
    /// The progress bar outputs to stderr to avoid interfering with stdout output.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };
        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        // The template is a constant; fall back to the default style if it ever fails to parse.
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Analyzing [{bar:40.cyan/blue}] {pos}/{len} logs ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb
    }

    /// Increments the progress counter by 1.
    ///
    /// Thread-safe; called from worker threads as checks finish.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Suspends the bar while `f` writes to the terminal.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.progress_bar.suspend(f)
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.progress_bar.position()
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
