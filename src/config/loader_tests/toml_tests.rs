//! Tests for TOML check lists and format detection.

use std::path::Path;

use crate::config::loader::ConfigLoader;
use crate::config::{ConfigFormat, FileConfigLoader};
use crate::error::LogCheckError;

use super::mock_fs::MockFileSystem;

#[test]
fn format_detection_by_extension() {
    assert_eq!(
        ConfigFormat::from_path(Path::new("checks.toml")),
        ConfigFormat::Toml
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("CHECKS.TOML")),
        ConfigFormat::Toml
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("checks.json")),
        ConfigFormat::Json
    );
    assert_eq!(ConfigFormat::from_path(Path::new("checks")), ConfigFormat::Json);
}

#[test]
fn load_toml_tables() {
    let content = r#"
[[logs]]
id = "web-1"
path = "/var/log/nginx/access.log"
type = "nginx"

[[logs]]
id = "db"
path = "/var/log/postgres.log"
type = "postgres"
"#;
    let fs = MockFileSystem::new().with_file("/project/checks.toml", content);

    let checks = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/project/checks.toml"))
        .unwrap();

    assert_eq!(checks.len(), 2);
    assert_eq!(checks[1].id, "db");
    assert_eq!(checks[1].kind, "postgres");
}

#[test]
fn empty_toml_has_no_checks() {
    let fs = MockFileSystem::new().with_file("/project/checks.toml", "");

    let checks = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/project/checks.toml"))
        .unwrap();

    assert!(checks.is_empty());
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/checks.toml", "this is not valid toml [[[");

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/project/checks.toml"))
        .unwrap_err();

    assert!(matches!(err, LogCheckError::ConfigToml { .. }));
    assert_eq!(err.error_type(), "ConfigParse");
}

#[test]
fn toml_entry_missing_path_is_rejected() {
    let content = r#"
[[logs]]
id = "web-1"
type = "nginx"
"#;
    let fs = MockFileSystem::new().with_file("/project/checks.toml", content);

    let result = FileConfigLoader::with_fs(fs).load_from_path(Path::new("/project/checks.toml"));

    assert!(result.is_err());
}

#[test]
fn toml_entry_without_type_or_with_extra_keys_loads() {
    let content = r#"
[[logs]]
id = "web-1"
path = "/var/log/nginx/access.log"
rotate = true
"#;
    let fs = MockFileSystem::new().with_file("/project/checks.toml", content);

    let checks = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/project/checks.toml"))
        .unwrap();

    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].kind, "");
}
