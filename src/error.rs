use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a run.
///
/// Failures inside a single file check are never represented here; they are
/// captured as `FAILED` analysis results by the analyzer.
#[derive(Error, Debug)]
pub enum LogCheckError {
    #[error("Failed to read configuration file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON configuration in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML configuration in {path}: {source}")]
    ConfigToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write report: {path}")]
    ExportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogCheckError {
    /// Whether the error happened while loading the check list, before any
    /// file was analyzed.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigRead { .. } | Self::ConfigParse { .. } | Self::ConfigToml { .. }
        )
    }

    /// Short category name shown in the diagnostic header.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::ConfigRead { .. } => "ConfigRead",
            Self::ConfigParse { .. } | Self::ConfigToml { .. } => "ConfigParse",
            Self::ExportWrite { .. } => "ExportWrite",
            Self::JsonSerialize(_) => "JsonSerialize",
            Self::Io(_) => "Io",
        }
    }

    /// One-line description without the underlying cause.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ConfigRead { path, .. } => {
                format!("cannot read configuration file '{}'", path.display())
            }
            Self::ConfigParse { path, .. } | Self::ConfigToml { path, .. } => {
                format!("malformed configuration file '{}'", path.display())
            }
            Self::ExportWrite { path, .. } => {
                format!("cannot write report to '{}'", path.display())
            }
            Self::JsonSerialize(_) => "failed to serialize results".to_string(),
            Self::Io(_) => "I/O failure".to_string(),
        }
    }

    /// The underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::ConfigRead { source, .. }
            | Self::ExportWrite { source, .. }
            | Self::Io(source) => Some(source.to_string()),
            Self::ConfigParse { source, .. } | Self::JsonSerialize(source) => {
                Some(source.to_string())
            }
            Self::ConfigToml { source, .. } => Some(source.message().to_string()),
        }
    }

    /// An actionable hint for the user, when one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigRead { source, .. } | Self::ExportWrite { source, .. } => {
                match source.kind() {
                    std::io::ErrorKind::NotFound => {
                        Some("Check that the file path exists and is spelled correctly")
                    }
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check the file permissions")
                    }
                    _ => None,
                }
            }
            Self::ConfigParse { .. } | Self::ConfigToml { .. } => {
                Some("Each entry needs string fields `id` and `path` (`type` is optional)")
            }
            Self::JsonSerialize(_) | Self::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LogCheckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
