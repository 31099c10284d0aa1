//! Forward-only buffered line scanner.

use std::fmt;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};

use crate::config::ReaderOptions;

/// Outcome of a single [`LineCursor::scan_next`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    /// A line, without its terminator
    Line(String),
    /// End of stream
    Exhausted,
}

/// A buffered line scanner that owns its handle.
///
/// Lines end at `\n`; a `\r` right before it is dropped as well. A final
/// line without a terminator is still yielded. Reaching the end of the
/// stream is reported as [`Scan::Exhausted`], never as an error.
pub struct LineCursor<R> {
    reader: BufReader<R>,
    options: ReaderOptions,
    buf: Vec<u8>,
}

impl<R: Read + Seek> LineCursor<R> {
    /// Create a cursor over `handle` with default options.
    pub fn new(handle: R) -> Self {
        Self::with_options(handle, ReaderOptions::default())
    }

    pub fn with_options(handle: R, options: ReaderOptions) -> Self {
        Self {
            reader: BufReader::with_capacity(options.buffer_capacity.max(1), handle),
            options,
            buf: Vec::new(),
        }
    }

    pub fn options(&self) -> ReaderOptions {
        self.options
    }

    /// Advance by one line.
    ///
    /// Errors are I/O failures other than end-of-stream, a line that is not
    /// valid UTF-8, or a line longer than `max_line_len`. A rejected line is
    /// consumed, so the next call starts on the following line.
    pub fn scan_next(&mut self) -> io::Result<Scan> {
        self.buf.clear();

        let n = match self.options.max_line_len {
            // +2 leaves room for "\r\n" after a line of exactly the limit
            Some(limit) => (&mut self.reader)
                .take((limit as u64).saturating_add(2))
                .read_until(b'\n', &mut self.buf)?,
            None => self.reader.read_until(b'\n', &mut self.buf)?,
        };
        if n == 0 {
            return Ok(Scan::Exhausted);
        }

        let terminated = self.buf.last() == Some(&b'\n');
        if terminated {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        if let Some(limit) = self.options.max_line_len {
            if self.buf.len() > limit {
                if !terminated {
                    self.reader.skip_until(b'\n')?;
                }
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line exceeds {limit} bytes"),
                ));
            }
        }

        let line = String::from_utf8(std::mem::take(&mut self.buf))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Scan::Line(line))
    }

    /// Seek the handle back to offset zero and build a brand-new cursor over it.
    ///
    /// The old cursor and its buffered bytes are discarded. If the seek fails
    /// the handle is returned inside a fresh cursor alongside the error.
    pub fn rewind(self) -> Result<Self, RewindError<R>> {
        let options = self.options;
        let mut handle = self.reader.into_inner();
        match handle.seek(SeekFrom::Start(0)) {
            Ok(_) => Ok(Self::with_options(handle, options)),
            Err(error) => Err(RewindError {
                cursor: Self::with_options(handle, options),
                error,
            }),
        }
    }

    /// Release the cursor and return the underlying handle.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R> fmt::Debug for LineCursor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineCursor")
            .field("options", &self.options)
            .field("buffered", &self.reader.buffer().len())
            .finish()
    }
}

/// A failed [`LineCursor::rewind`], carrying the cursor so the handle is not lost.
pub struct RewindError<R> {
    cursor: LineCursor<R>,
    error: io::Error,
}

impl<R> RewindError<R> {
    pub fn error(&self) -> &io::Error {
        &self.error
    }

    pub fn into_parts(self) -> (LineCursor<R>, io::Error) {
        (self.cursor, self.error)
    }
}

impl<R> fmt::Debug for RewindError<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewindError")
            .field("error", &self.error)
            .finish()
    }
}

impl<R> fmt::Display for RewindError<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rewind failed: {}", self.error)
    }
}
