//! Source provider trait definition.

use std::fmt::Debug;
use std::io::{Read, Seek};

use crate::error::ReaderError;

/// Trait for sources a cyclic reader can be built on.
///
/// Implementors validate the source and return an exclusive, seekable
/// handle positioned at the beginning. A source that has no bytes at all
/// must be rejected with [`ReaderError::EmptyFile`].
pub trait SourceProvider: Send + Sync + Debug {
    /// The handle type produced by [`open`](SourceProvider::open).
    type Handle: Read + Seek + Send;

    /// Returns a unique identifier for this source.
    ///
    /// This is used for error messages and logging.
    /// Convention: the file path for files.
    fn id(&self) -> &str;

    /// Validate the source and open a fresh handle on it.
    fn open(&self) -> Result<Self::Handle, ReaderError>;
}
