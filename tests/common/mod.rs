#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the logcheck binary.
#[macro_export]
macro_rules! logcheck {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("logcheck"))
    };
}

/// A temporary directory holding log files and a check list.
pub struct TestFixture {
    pub dir: TempDir,
    entries: Vec<(String, PathBuf, String)>,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            entries: Vec::new(),
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a log file and registers it in the check list.
    pub fn add_log(&mut self, id: &str, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write log file");
        self.entries.push((id.to_string(), path.clone(), "app".to_string()));
        path
    }

    /// Registers a check for a file that is never created.
    pub fn add_missing(&mut self, id: &str, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        self.entries.push((id.to_string(), path, "app".to_string()));
    }

    /// Writes the registered checks as a JSON check list and returns its path.
    pub fn write_json_config(&self) -> PathBuf {
        let records: Vec<_> = self
            .entries
            .iter()
            .map(|(id, path, kind)| {
                serde_json::json!({ "id": id, "path": path, "type": kind })
            })
            .collect();
        let path = self.dir.path().join("config.json");
        let content = serde_json::to_string_pretty(&records).expect("serializable config");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Writes the registered checks as a TOML check list and returns its path.
    pub fn write_toml_config(&self) -> PathBuf {
        let mut content = String::new();
        for (id, path, kind) in &self.entries {
            let path = path.display().to_string().replace('\\', "\\\\");
            content.push_str(&format!(
                "[[logs]]\nid = \"{id}\"\npath = \"{path}\"\ntype = \"{kind}\"\n\n"
            ));
        }
        let path = self.dir.path().join("config.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Writes arbitrary config content.
    pub fn write_raw_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write config");
        path
    }
}
