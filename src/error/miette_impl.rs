//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{ErrorClass, ReaderError};

/// A diagnostic wrapper for reader errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ReaderDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    pub severity: Severity,
}

fn help_for(class: ErrorClass) -> &'static str {
    match class {
        ErrorClass::Open => "Check that the file exists, is readable, and the reader was not closed",
        ErrorClass::EmptyFile => "The data file must contain at least one line",
        ErrorClass::Scan => "The data file may be corrupted, not UTF-8, or contain an over-long line",
    }
}

impl From<ReaderError> for ReaderDiagnostic {
    fn from(e: ReaderError) -> Self {
        let class = e.class();
        ReaderDiagnostic {
            message: format!("[{}] on '{}'", class, e.target()),
            help: Some(help_for(class).into()),
            source: Some(Box::new(e)),
            severity: Severity::Error,
        }
    }
}

impl From<ReaderError> for miette::Report {
    fn from(e: ReaderError) -> Self {
        miette::Report::new(ReaderDiagnostic::from(e))
    }
}
