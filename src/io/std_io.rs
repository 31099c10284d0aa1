//! File-backed source and the validating opener.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use super::SourceProvider;
use crate::error::ReaderError;

/// Stat and open `path` for reading.
///
/// Fails with [`ReaderError::Open`] when the path cannot be stat'd or opened,
/// or is not a regular file, and with [`ReaderError::EmptyFile`] when the file
/// has zero bytes.
pub fn open_file(path: &Path) -> Result<File, ReaderError> {
    let target = path.to_string_lossy();

    let meta = std::fs::metadata(path).map_err(|e| ReaderError::open(&*target, e))?;
    if !meta.is_file() {
        return Err(ReaderError::open(
            &*target,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    if meta.len() == 0 {
        return Err(ReaderError::EmptyFile {
            target: target.into_owned(),
        });
    }

    let file = File::open(path).map_err(|e| ReaderError::open(&*target, e))?;
    debug!("opened '{}' ({} bytes)", target, meta.len());
    Ok(file)
}

/// Source provider for files on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    id: String,
    path: PathBuf,
}

impl FileSource {
    /// Create a new file source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceProvider for FileSource {
    type Handle = File;

    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> Result<File, ReaderError> {
        open_file(&self.path)
    }
}
