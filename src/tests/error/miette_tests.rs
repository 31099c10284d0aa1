#![cfg(feature = "miette")]

use miette::Diagnostic;

use crate::error::{ReaderDiagnostic, ReaderError};

#[test]
fn diagnostic_carries_class_target_and_help() {
    let err = ReaderError::EmptyFile {
        target: "users.csv".into(),
    };

    let diag = ReaderDiagnostic::from(err);
    assert_eq!(diag.message, "[EmptyFile] on 'users.csv'");
    assert!(diag.help().is_some());
    assert!(diag.source.is_some());
}

#[test]
fn report_from_reader_error() {
    let err = ReaderError::Closed {
        target: "users.csv".into(),
    };

    let report: miette::Report = err.into();
    assert!(report.to_string().contains("[Open]"));
}
