//! Shared handle exposed to embedding environments.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use std::sync::Arc;

use crate::config::ReaderConfig;
use crate::error::ReaderError;
use crate::reader::{CyclicReader, RowProvider};
use crate::split::Row;

/// A cheaply cloneable reference to one shared [`CyclicReader`].
///
/// Every clone draws from the same cursor. Hand a clone to each caller
/// that should share the file.
#[derive(Debug)]
pub struct ReaderHandle<R = File> {
    inner: Arc<CyclicReader<R>>,
}

impl<R> Clone for ReaderHandle<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl ReaderHandle<File> {
    /// Validate and open the file at `path`.
    pub fn construct(path: impl AsRef<Path>) -> Result<Self, ReaderError> {
        Ok(Self::new(CyclicReader::open(path)?))
    }

    pub fn from_config(config: &ReaderConfig) -> Result<Self, ReaderError> {
        Ok(Self::new(config.open()?))
    }
}

impl<R: Read + Seek> ReaderHandle<R> {
    pub fn new(reader: CyclicReader<R>) -> Self {
        Self {
            inner: Arc::new(reader),
        }
    }

    pub fn get_line(&self, separator: &str) -> Result<Row, ReaderError> {
        self.inner.get_line(separator)
    }

    /// Close the shared reader for every clone of this handle.
    pub fn close(&self) -> Result<(), ReaderError> {
        self.inner.close()
    }

    pub fn reader(&self) -> &CyclicReader<R> {
        &self.inner
    }
}

impl<R> RowProvider for ReaderHandle<R>
where
    R: Read + Seek + Send,
{
    fn next_row(&self, separator: &str) -> Result<Row, ReaderError> {
        self.get_line(separator)
    }
}
