//! Tests for ReaderConfig and ReaderOptions.

use std::path::PathBuf;

use crate::config::{ConfigError, ReaderConfig, ReaderOptions};
use crate::tests::support::data_file;

#[test]
fn defaults() {
    let options = ReaderOptions::default();
    assert_eq!(options.buffer_capacity, 8 * 1024);
    assert_eq!(options.max_line_len, Some(64 * 1024));

    let config = ReaderConfig::new("data.csv");
    assert_eq!(config.path, PathBuf::from("data.csv"));
    assert_eq!(config.separator, ",");
    assert_eq!(config.options, options);
}

#[test]
fn builder_methods() {
    let config = ReaderConfig::new("data.csv")
        .with_separator(";")
        .with_buffer_capacity(16)
        .with_max_line_len(None);

    assert_eq!(config.separator, ";");
    assert_eq!(config.options.buffer_capacity, 16);
    assert_eq!(config.options.max_line_len, None);
}

#[test]
fn open_reads_configured_file() {
    let (_dir, path) = data_file("1;2\n");
    let config = ReaderConfig::new(&path).with_separator(";");

    let reader = config.open().expect("open");
    assert_eq!(reader.get_line(&config.separator).unwrap(), vec!["1", "2"]);
}

#[test]
fn unknown_extension_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reader.ini");
    std::fs::write(&path, "path = x").unwrap();

    let err = ReaderConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = ReaderConfig::from_path(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[cfg(feature = "json")]
#[test]
fn parse_json_with_defaults() {
    let cfg = ReaderConfig::from_json_str(r#"{"path": "users.csv"}"#).unwrap();

    assert_eq!(cfg.path, PathBuf::from("users.csv"));
    assert_eq!(cfg.separator, ",");
    assert_eq!(cfg.options, ReaderOptions::default());
}

#[cfg(feature = "json")]
#[test]
fn parse_json_options() {
    let json = r#"{
        "path": "users.csv",
        "separator": "\t",
        "options": { "buffer_capacity": 128, "max_line_len": null }
    }"#;
    let cfg = ReaderConfig::from_json_str(json).unwrap();

    assert_eq!(cfg.separator, "\t");
    assert_eq!(cfg.options.buffer_capacity, 128);
    assert_eq!(cfg.options.max_line_len, None);
}

#[cfg(feature = "json")]
#[test]
fn parse_json_missing_path_fails() {
    let err = ReaderConfig::from_json_str(r#"{"separator": ";"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[cfg(feature = "json")]
#[test]
fn from_path_picks_json_loader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reader.json");
    std::fs::write(&path, r#"{"path": "a.csv", "separator": "|"}"#).unwrap();

    let cfg = ReaderConfig::from_path(&path).unwrap();
    assert_eq!(cfg.separator, "|");
}

#[cfg(feature = "yaml")]
#[test]
fn parse_yaml() {
    let yaml = r#"
path: users.csv
separator: ";"
options:
  max_line_len: 1024
"#;
    let cfg = ReaderConfig::from_yaml_str(yaml).unwrap();

    assert_eq!(cfg.separator, ";");
    assert_eq!(cfg.options.max_line_len, Some(1024));
    assert_eq!(cfg.options.buffer_capacity, 8 * 1024);
}

#[cfg(feature = "toml")]
#[test]
fn parse_toml() {
    let toml = r#"
path = "users.csv"

[options]
buffer_capacity = 64
"#;
    let cfg = ReaderConfig::from_toml_str(toml).unwrap();

    assert_eq!(cfg.separator, ",");
    assert_eq!(cfg.options.buffer_capacity, 64);
}
