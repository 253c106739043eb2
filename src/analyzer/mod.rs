mod delay;
mod markers;
mod types;

pub use delay::{
    DEFAULT_MAX_DELAY_MS, DEFAULT_MIN_DELAY_MS, Delay, FixedDelay, NoDelay, RandomDelay,
};
pub use markers::{DEFAULT_MARKERS, MarkerSet};
pub use types::{AnalysisResult, CheckDescriptor, FailureKind, Status};

use std::fs::{self, File};
use std::io::{self, Read};
use std::sync::Arc;

pub const EMPTY_FILE_MESSAGE: &str = "empty file - no analysis needed";
pub const SUCCESS_MESSAGE: &str = "analysis completed successfully";

/// Prefix of `error_details` for content-parsing failures.
///
/// The full detail is `"parsing failed: <line>"`, with the line as returned by
/// [`MarkerSet::find_in`] (trailing `\r` removed).
pub const PARSE_FAILURE_TAG: &str = "parsing failed";

/// A classified failure: the kind plus the text stored in `error_details`.
struct Failure {
    kind: FailureKind,
    details: String,
}

impl Failure {
    fn io(kind: FailureKind, source: &io::Error) -> Self {
        Self {
            kind,
            details: source.to_string(),
        }
    }
}

/// Checks a single log file.
///
/// Holds no mutable state, so one instance can be shared across any number
/// of concurrent `analyze` calls.
#[derive(Clone)]
pub struct LogAnalyzer {
    markers: MarkerSet,
    delay: Arc<dyn Delay>,
}

impl LogAnalyzer {
    /// Default markers and a 50-200 ms random delay.
    #[must_use]
    pub fn new() -> Self {
        Self {
            markers: MarkerSet::default(),
            delay: Arc::new(RandomDelay::default()),
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: impl Delay + 'static) -> Self {
        self.delay = Arc::new(delay);
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: MarkerSet) -> Self {
        self.markers = markers;
        self
    }

    #[must_use]
    pub const fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Runs every check against the descriptor's file.
    ///
    /// Never fails: each I/O or content problem becomes a `FAILED` result.
    #[must_use]
    pub fn analyze(&self, descriptor: &CheckDescriptor) -> AnalysisResult {
        match self.run_checks(descriptor) {
            Ok(message) => AnalysisResult::ok(descriptor, message),
            Err(failure) => AnalysisResult::failed(descriptor, failure.kind, failure.details),
        }
    }

    fn run_checks(&self, descriptor: &CheckDescriptor) -> Result<&'static str, Failure> {
        let path = descriptor.path.as_path();

        // Only a missing entry is classified here; other stat errors surface at open.
        if let Err(e) = fs::metadata(path)
            && e.kind() == io::ErrorKind::NotFound
        {
            return Err(Failure::io(FailureKind::NotFound, &e));
        }

        // The handle is dropped on every return path below.
        let mut file = File::open(path).map_err(|e| Failure::io(FailureKind::Inaccessible, &e))?;

        let metadata = file
            .metadata()
            .map_err(|e| Failure::io(FailureKind::Metadata, &e))?;
        if metadata.len() == 0 {
            return Ok(EMPTY_FILE_MESSAGE);
        }

        self.delay.pause();

        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| Failure::io(FailureKind::Unreadable, &e))?;
        let content = String::from_utf8_lossy(&content);

        if let Some(line) = self.markers.find_in(&content) {
            return Err(Failure {
                kind: FailureKind::ParseError,
                details: format!("{PARSE_FAILURE_TAG}: {line}"),
            });
        }

        Ok(SUCCESS_MESSAGE)
    }
}

impl Default for LogAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LogAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogAnalyzer")
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
