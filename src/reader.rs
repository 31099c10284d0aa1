//! The cyclic, concurrency-safe line reader.

use std::fmt;
use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::config::ReaderOptions;
use crate::error::ReaderError;
use crate::io::{FileSource, LineCursor, Scan, SourceProvider};
use crate::split::{Row, split_fields};

/// Anything that hands out rows on demand.
pub trait RowProvider: Send + Sync {
    /// Draw the next row, splitting the line on `separator`.
    fn next_row(&self, separator: &str) -> Result<Row, ReaderError>;
}

/// Hands out successive lines of one source to any number of callers,
/// starting over from the first line once the source is exhausted.
///
/// A whole `get_line` call (scan, rewind if needed, re-scan, split) runs
/// under one lock, so every line goes to exactly one caller and no caller
/// sees a half-finished rewind. The reader owns its handle until
/// [`close`](CyclicReader::close) is called.
pub struct CyclicReader<R> {
    id: String,
    cursor: Mutex<Option<LineCursor<R>>>,
    rewinds: AtomicU64,
}

impl CyclicReader<File> {
    /// Open the file at `path` with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ReaderError> {
        Self::open_with_options(path, ReaderOptions::default())
    }

    pub fn open_with_options(
        path: impl AsRef<Path>,
        options: ReaderOptions,
    ) -> Result<Self, ReaderError> {
        Self::from_source_with_options(&FileSource::new(path.as_ref()), options)
    }
}

impl<R: std::io::Read + std::io::Seek> CyclicReader<R> {
    /// Validate and open `source`.
    pub fn from_source<S>(source: &S) -> Result<Self, ReaderError>
    where
        S: SourceProvider<Handle = R>,
    {
        Self::from_source_with_options(source, ReaderOptions::default())
    }

    pub fn from_source_with_options<S>(
        source: &S,
        options: ReaderOptions,
    ) -> Result<Self, ReaderError>
    where
        S: SourceProvider<Handle = R>,
    {
        let handle = source.open()?;
        Ok(Self::from_handle(source.id(), handle, options))
    }

    /// Wrap an already opened handle. The caller is responsible for having
    /// checked that it is non-empty.
    pub fn from_handle(id: impl Into<String>, handle: R, options: ReaderOptions) -> Self {
        Self {
            id: id.into(),
            cursor: Mutex::new(Some(LineCursor::with_options(handle, options))),
            rewinds: AtomicU64::new(0),
        }
    }

    /// Identifier of the underlying source (the path for files).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of times the reader has wrapped around to the first line.
    pub fn rewinds(&self) -> u64 {
        self.rewinds.load(Ordering::Relaxed)
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    /// Return the next line split on `separator`, wrapping around at the end.
    ///
    /// Fails with [`ReaderError::Closed`] after [`close`](Self::close), with
    /// [`ReaderError::Scan`] on an I/O error, and with
    /// [`ReaderError::EmptyFile`] when no line can be read even right after
    /// rewinding.
    pub fn get_line(&self, separator: &str) -> Result<Row, ReaderError> {
        let mut slot = self.lock();
        let cursor = slot.take().ok_or_else(|| self.closed())?;
        let (cursor, line) = self.advance(cursor);
        *slot = Some(cursor);
        Ok(split_fields(&line?, separator))
    }

    /// Release the handle. Later calls fail with [`ReaderError::Closed`],
    /// including a second `close`.
    pub fn close(&self) -> Result<(), ReaderError> {
        let cursor = self.lock().take().ok_or_else(|| self.closed())?;
        drop(cursor.into_inner());
        debug!("closed '{}'", self.id);
        Ok(())
    }

    fn advance(&self, mut cursor: LineCursor<R>) -> (LineCursor<R>, Result<String, ReaderError>) {
        match cursor.scan_next() {
            Ok(Scan::Line(line)) => return (cursor, Ok(line)),
            Ok(Scan::Exhausted) => {}
            Err(e) => return (cursor, Err(ReaderError::scan(&self.id, e))),
        }

        let mut cursor = match cursor.rewind() {
            Ok(cursor) => cursor,
            Err(e) => {
                let (cursor, e) = e.into_parts();
                return (cursor, Err(ReaderError::scan(&self.id, e)));
            }
        };
        let n = self.rewinds.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("rewound '{}' (wraparound #{})", self.id, n);

        let line = match cursor.scan_next() {
            Ok(Scan::Line(line)) => Ok(line),
            Ok(Scan::Exhausted) => Err(ReaderError::EmptyFile {
                target: self.id.clone(),
            }),
            Err(e) => Err(ReaderError::scan(&self.id, e)),
        };
        (cursor, line)
    }

    fn closed(&self) -> ReaderError {
        ReaderError::Closed {
            target: self.id.clone(),
        }
    }
}

impl<R> CyclicReader<R> {
    // The cursor is out of its slot only while `advance` runs, which
    // reports every failure as a value, so a poisoned lock still guards a
    // consistent slot.
    fn lock(&self) -> MutexGuard<'_, Option<LineCursor<R>>> {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R> fmt::Debug for CyclicReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CyclicReader")
            .field("id", &self.id)
            .field("rewinds", &self.rewinds.load(Ordering::Relaxed))
            .finish()
    }
}

impl<R> RowProvider for CyclicReader<R>
where
    R: std::io::Read + std::io::Seek + Send,
{
    fn next_row(&self, separator: &str) -> Result<Row, ReaderError> {
        self.get_line(separator)
    }
}
