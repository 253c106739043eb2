use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One unit of work: a log file to check.
///
/// `id` and `path` are required when deserializing; a missing `type` reads
/// as an empty string and unrecognized keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDescriptor {
    /// Caller-assigned identifier (need not be unique).
    pub id: String,
    pub path: PathBuf,
    /// Free-form log type tag. Not consulted by the analyzer.
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl CheckDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            kind: kind.into(),
        }
    }
}

/// Outcome of a single file check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAILED")]
    Failed,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of reasons a file check can fail.
///
/// Each kind maps to exactly one user-facing message; classification never
/// inspects error strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The path does not resolve to an existing entry.
    NotFound,
    /// The path exists but could not be opened for reading.
    Inaccessible,
    /// Size information could not be retrieved from the open handle.
    Metadata,
    /// The content could not be read after a successful open.
    Unreadable,
    /// A marker substring was found in the content.
    ParseError,
}

impl FailureKind {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotFound => "file not found",
            Self::Inaccessible => "file inaccessible",
            Self::Metadata => "cannot read file metadata",
            Self::Unreadable => "file read error",
            Self::ParseError => "parsing error detected",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of analyzing one [`CheckDescriptor`]. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub id: String,
    pub path: PathBuf,
    pub status: Status,
    pub message: String,
    pub error_details: Option<String>,
}

impl AnalysisResult {
    #[must_use]
    pub fn ok(descriptor: &CheckDescriptor, message: &str) -> Self {
        Self {
            id: descriptor.id.clone(),
            path: descriptor.path.clone(),
            status: Status::Ok,
            message: message.to_string(),
            error_details: None,
        }
    }

    #[must_use]
    pub fn failed(descriptor: &CheckDescriptor, kind: FailureKind, details: String) -> Self {
        Self {
            id: descriptor.id.clone(),
            path: descriptor.path.clone(),
            status: Status::Failed,
            message: kind.message().to_string(),
            error_details: Some(details),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.status, Status::Ok)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, Status::Failed)
    }
}
