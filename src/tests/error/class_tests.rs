//! Tests for ReaderError classification and messages.

use std::error::Error;
use std::io;

use crate::error::{ErrorClass, ReaderError};

#[test]
fn closed_counts_as_open_class() {
    let err = ReaderError::Closed {
        target: "data.csv".to_string(),
    };
    assert_eq!(err.class(), ErrorClass::Open);
    assert_eq!(err.target(), "data.csv");
    assert_eq!(err.to_string(), "reader for 'data.csv' is closed");
}

#[test]
fn classes_display_like_names() {
    assert_eq!(ErrorClass::Open.to_string(), "Open");
    assert_eq!(ErrorClass::EmptyFile.to_string(), "EmptyFile");
    assert_eq!(ErrorClass::Scan.to_string(), "Scan");
}

#[test]
fn open_and_scan_keep_io_source() {
    let err = ReaderError::Open {
        target: "a.csv".into(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.class(), ErrorClass::Open);
    assert!(err.to_string().contains("a.csv"));
    assert_eq!(err.source().unwrap().to_string(), "denied");

    let err = ReaderError::Scan {
        target: "b.csv".into(),
        source: io::Error::new(io::ErrorKind::InvalidData, "bad bytes"),
    };
    assert_eq!(err.class(), ErrorClass::Scan);
    assert!(err.source().is_some());
}

#[test]
fn empty_file_has_no_source() {
    let err = ReaderError::EmptyFile {
        target: "c.csv".into(),
    };
    assert_eq!(err.class(), ErrorClass::EmptyFile);
    assert!(err.source().is_none());
    assert_eq!(err.to_string(), "file 'c.csv' is empty");
}
