//! Tests for CliArgs and SeparatorArg.

use crate::cli::{CliArgs, CliError, SeparatorArg};
use crate::tests::support::data_file;

#[test]
fn separator_names_and_escapes() {
    assert_eq!(SeparatorArg::parse("tab").as_str(), "\t");
    assert_eq!(SeparatorArg::parse("TAB").as_str(), "\t");
    assert_eq!(SeparatorArg::parse("\\t").as_str(), "\t");
    assert_eq!(SeparatorArg::parse("pipe").as_str(), "|");
    assert_eq!(SeparatorArg::parse("semicolon").as_str(), ";");
    assert_eq!(SeparatorArg::parse("::").as_str(), "::");
    assert_eq!(SeparatorArg::default().as_str(), ",");
}

#[test]
fn missing_source_is_error() {
    let err = CliArgs::new().reader_config().unwrap_err();
    assert!(matches!(err, CliError::MissingSource));
}

#[test]
fn file_flag_alone_builds_config() {
    let cfg = CliArgs::new()
        .with_file("users.csv")
        .with_separator(";")
        .reader_config()
        .unwrap();

    assert_eq!(cfg.path.to_string_lossy(), "users.csv");
    assert_eq!(cfg.separator, ";");
}

#[cfg(feature = "json")]
#[test]
fn flags_override_config_file() {
    let (dir, data) = data_file("1\n");
    let cfg_path = dir.path().join("reader.json");
    std::fs::write(&cfg_path, r#"{"path": "elsewhere.csv", "separator": "|"}"#).unwrap();

    let args = CliArgs {
        config: Some(cfg_path.to_string_lossy().into_owned()),
        ..CliArgs::default()
    };
    let cfg = args.reader_config().unwrap();
    assert_eq!(cfg.separator, "|");
    assert_eq!(cfg.path.to_string_lossy(), "elsewhere.csv");

    let args = CliArgs {
        file: Some(data.to_string_lossy().into_owned()),
        separator: Some(SeparatorArg::parse("tab")),
        ..args
    };
    let cfg = args.reader_config().unwrap();
    assert_eq!(cfg.path, data);
    assert_eq!(cfg.separator, "\t");
}
