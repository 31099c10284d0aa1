//! Error types for the cyclic reader.
//!
//! This module provides:
//! - `ReaderError`: a single failure with the target (path or source id) it concerns
//! - `ErrorClass`: the coarse taxonomy callers branch on (open, empty file, scan)

use std::fmt;
use std::io;

use thiserror::Error;

/// Coarse classification of a [`ReaderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The source could not be opened, or the reader was already closed
    Open,
    /// The source has no lines to hand out
    EmptyFile,
    /// An I/O error other than end-of-stream while scanning
    Scan,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorClass::Open => write!(f, "Open"),
            ErrorClass::EmptyFile => write!(f, "EmptyFile"),
            ErrorClass::Scan => write!(f, "Scan"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReaderError {
    /// The path could not be stat'd or opened.
    #[error("cannot open '{target}': {source}")]
    Open {
        target: String,
        #[source]
        source: io::Error,
    },

    /// The reader was closed before this call.
    #[error("reader for '{target}' is closed")]
    Closed { target: String },

    /// Zero bytes at open, or no line even after rewinding.
    #[error("file '{target}' is empty")]
    EmptyFile { target: String },

    #[error("error scanning '{target}': {source}")]
    Scan {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl ReaderError {
    /// The taxonomy class of this error. `Closed` counts as an open-class misuse.
    pub fn class(&self) -> ErrorClass {
        match self {
            ReaderError::Open { .. } | ReaderError::Closed { .. } => ErrorClass::Open,
            ReaderError::EmptyFile { .. } => ErrorClass::EmptyFile,
            ReaderError::Scan { .. } => ErrorClass::Scan,
        }
    }

    /// Identifier of the file or source the error concerns.
    pub fn target(&self) -> &str {
        match self {
            ReaderError::Open { target, .. }
            | ReaderError::Closed { target }
            | ReaderError::EmptyFile { target }
            | ReaderError::Scan { target, .. } => target,
        }
    }

    pub(crate) fn open(target: impl Into<String>, source: io::Error) -> Self {
        ReaderError::Open {
            target: target.into(),
            source,
        }
    }

    pub(crate) fn scan(target: impl Into<String>, source: io::Error) -> Self {
        ReaderError::Scan {
            target: target.into(),
            source,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
