//! Tests for the validating file opener.

use std::io::Read;

use crate::error::{ErrorClass, ReaderError};
use crate::io::{FileSource, SourceProvider, open_file};
use crate::tests::support::data_file;

#[test]
fn open_file_reads_from_start() {
    let (_dir, path) = data_file("a,b\n");

    let mut file = open_file(&path).expect("open");
    let mut buf = String::new();
    file.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "a,b\n");
}

#[test]
fn open_file_missing_path_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");

    let err = open_file(&path).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Open);
    match err {
        ReaderError::Open { target, source } => {
            assert_eq!(target, path.to_string_lossy());
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Open, got {other:?}"),
    }
}

#[test]
fn open_file_zero_bytes_is_empty_file() {
    let (_dir, path) = data_file("");

    let err = open_file(&path).unwrap_err();
    assert!(matches!(err, ReaderError::EmptyFile { .. }));
}

#[test]
fn open_file_directory_is_open_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = open_file(dir.path()).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Open);
}

#[test]
fn file_source_uses_path_as_id() {
    let (_dir, path) = data_file("x\n");
    let src = FileSource::new(&path);

    assert_eq!(src.id(), path.to_string_lossy());
    assert_eq!(src.path(), path.as_path());
    assert!(src.open().is_ok());
}
