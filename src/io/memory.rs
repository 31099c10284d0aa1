//! In-memory source for testing.

use std::io::Cursor;
use std::sync::Arc;

use super::SourceProvider;
use crate::error::ReaderError;

/// In-memory source for tests and benches.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<Vec<u8>>,
}

impl InMemorySource {
    /// Create a new in-memory source with the given data.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }

    /// Create a new in-memory source from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl SourceProvider for InMemorySource {
    type Handle = Cursor<Vec<u8>>;

    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> Result<Cursor<Vec<u8>>, ReaderError> {
        if self.data.is_empty() {
            return Err(ReaderError::EmptyFile {
                target: self.id.clone(),
            });
        }
        Ok(Cursor::new(self.data.as_ref().clone()))
    }
}
