use std::path::Path;

use serde::Deserialize;

use crate::analyzer::CheckDescriptor;
use crate::error::{LogCheckError, Result};

use super::filesystem::{FileSystem, RealFileSystem};

/// On-disk format of a check list, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// A top-level array of `{ "id", "path", "type" }` objects.
    Json,
    /// `[[logs]]` tables with the same keys.
    Toml,
}

impl ConfigFormat {
    /// `.toml` selects TOML; anything else is read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlCheckList {
    #[serde(default)]
    logs: Vec<CheckDescriptor>,
}

/// Trait for loading the list of checks to run.
pub trait ConfigLoader {
    /// Load check descriptors from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or any entry is malformed.
    /// No partial list is ever returned.
    fn load_from_path(&self, path: &Path) -> Result<Vec<CheckDescriptor>>;
}

/// Loads check lists from the filesystem.
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse(path: &Path, content: &str) -> Result<Vec<CheckDescriptor>> {
        match ConfigFormat::from_path(path) {
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|source| LogCheckError::ConfigParse {
                    path: path.to_path_buf(),
                    source,
                })
            }
            ConfigFormat::Toml => toml::from_str::<TomlCheckList>(content)
                .map(|list| list.logs)
                .map_err(|source| LogCheckError::ConfigToml {
                    path: path.to_path_buf(),
                    source,
                }),
        }
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load_from_path(&self, path: &Path) -> Result<Vec<CheckDescriptor>> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| LogCheckError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(path, &content)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
