//! Sources and the line cursor that scans them.
//!
//! This module provides:
//! - `SourceProvider`: Trait for anything that can hand out a seekable handle
//! - `FileSource` / `open_file`: validated opening of files on disk
//! - `InMemorySource`: byte-buffer source for tests and benches
//! - `LineCursor`: forward-only buffered line scanner with rewind

mod cursor;
mod memory;
mod source;
mod std_io;

pub use cursor::{LineCursor, RewindError, Scan};
pub use memory::InMemorySource;
pub use source::SourceProvider;
pub use std_io::{FileSource, open_file};
