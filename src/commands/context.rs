use crate::analyzer::{LogAnalyzer, NoDelay};
use crate::cli::{AnalyzeArgs, ColorChoice};
use crate::config::{ConfigLoader, FileConfigLoader};
use crate::dispatcher::{ConcurrencyLimit, Dispatcher};
use crate::output::ColorMode;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

// =============================================================================
// Context Struct for Dependency Injection
// =============================================================================

/// Context for the analyze command containing injectable dependencies.
///
/// Production code uses `from_args()`; tests can use `new()` to inject a
/// mock loader or a delay-free dispatcher.
pub struct AnalyzeContext {
    /// Injectable check-list loader.
    pub loader: Box<dyn ConfigLoader>,
    pub dispatcher: Dispatcher,
}

impl AnalyzeContext {
    /// Create context from command-line arguments (production factory).
    #[must_use]
    pub fn from_args(args: &AnalyzeArgs) -> Self {
        let analyzer = if args.no_delay {
            LogAnalyzer::new().with_delay(NoDelay)
        } else {
            LogAnalyzer::new()
        };
        let dispatcher =
            Dispatcher::new(analyzer).with_limit(ConcurrencyLimit::from_jobs(args.jobs));

        Self {
            loader: Box::new(FileConfigLoader::new()),
            dispatcher,
        }
    }

    /// Create context with custom components (for testing).
    #[must_use]
    pub fn new(loader: Box<dyn ConfigLoader>, dispatcher: Dispatcher) -> Self {
        Self { loader, dispatcher }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
