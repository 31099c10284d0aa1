//! Scanner options.

use serde::Deserialize;

/// Default `BufReader` capacity for every cursor, including rebuilt ones.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Default upper bound on the length of a single line, in bytes.
pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;

/// Options applied to the line cursor of a reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Capacity of the read buffer
    pub buffer_capacity: usize,
    /// Longest accepted line (terminator excluded); `None` disables the limit
    pub max_line_len: Option<usize>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            max_line_len: Some(DEFAULT_MAX_LINE_LEN),
        }
    }
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read buffer capacity. Zero is treated as one byte.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Set the line length limit.
    pub fn with_max_line_len(mut self, limit: Option<usize>) -> Self {
        self.max_line_len = limit;
        self
    }
}
