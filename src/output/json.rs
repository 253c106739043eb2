use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analyzer::{AnalysisResult, Status};
use crate::error::{LogCheckError, Result};

use super::OutputFormatter;

/// Writes analysis results as a pretty-printed JSON array.
pub struct JsonExporter;

#[derive(Debug, Serialize, Deserialize)]
struct ExportedResult {
    log_id: String,
    /// JSON strings are UTF-8: a non-UTF-8 path is written with U+FFFD in
    /// place of the invalid bytes and does not parse back to the same path.
    file_path: String,
    status: Status,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_details: Option<String>,
}

impl From<&AnalysisResult> for ExportedResult {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            log_id: result.id.clone(),
            file_path: result.path.to_string_lossy().into_owned(),
            status: result.status,
            message: result.message.clone(),
            error_details: result.error_details.clone().filter(|d| !d.is_empty()),
        }
    }
}

impl From<ExportedResult> for AnalysisResult {
    fn from(exported: ExportedResult) -> Self {
        Self {
            id: exported.log_id,
            path: PathBuf::from(exported.file_path),
            status: exported.status,
            message: exported.message,
            error_details: exported.error_details,
        }
    }
}

impl JsonExporter {
    /// Serializes `results` and writes them to `path`, creating parent directories.
    ///
    /// # Errors
    /// Returns `ExportWrite` if the directory or file cannot be written.
    pub fn export(&self, results: &[AnalysisResult], path: &Path) -> Result<()> {
        let mut content = self.format(results)?;
        content.push('\n');

        let write_error = |source| LogCheckError::ExportWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, content).map_err(write_error)
    }

    /// Parses a previously exported report.
    ///
    /// Paths come back exactly as exported, so only UTF-8 paths round-trip.
    ///
    /// # Errors
    /// Returns an error if `content` is not a valid export.
    pub fn parse(&self, content: &str) -> Result<Vec<AnalysisResult>> {
        let exported: Vec<ExportedResult> = serde_json::from_str(content)?;
        Ok(exported.into_iter().map(AnalysisResult::from).collect())
    }
}

impl OutputFormatter for JsonExporter {
    fn format(&self, results: &[AnalysisResult]) -> Result<String> {
        let exported: Vec<ExportedResult> = results.iter().map(ExportedResult::from).collect();
        Ok(serde_json::to_string_pretty(&exported)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
