//! # rowloop
//!
//! Hands out successive rows of a delimited text file to many concurrent
//! callers, starting over from the first row once the file is exhausted.
//!
//! ## Overview
//!
//! rowloop provides:
//! - **Cyclic reading**: `CyclicReader::get_line` returns the next line split into
//!   fields and wraps around to the first line at end of file
//! - **Concurrency safety**: one lock covers a whole call, so each line goes to exactly
//!   one caller and no caller observes a half-finished rewind
//! - **Typed errors**: `ReaderError` distinguishes open failures, empty files and scan errors
//! - **Shared handles**: `ReaderHandle` is a cloneable reference for every caller that
//!   should draw from the same file
//! - **Async**: `AsyncReaderHandle` runs calls on tokio's blocking pool
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rowloop::CyclicReader;
//!
//! fn main() -> Result<(), rowloop::ReaderError> {
//!     let reader = CyclicReader::open("users.csv")?;
//!     let row = reader.get_line(",")?;
//!     println!("{row:?}");
//!     reader.close()
//! }
//! ```
//!
//! ## Line semantics
//!
//! - Lines end at `\n`; a preceding `\r` is dropped too. A final line without a
//!   terminator still counts.
//! - Fields are split on the literal separator; there is no CSV quoting.
//! - A file with a single line hands out that line on every call.
//! - A file that is empty when opened is rejected. A file truncated to nothing
//!   while open makes `get_line` fail with `ReaderError::EmptyFile`.
//!
//! ## Features
//!
//! - `json` - load `ReaderConfig` from JSON (enabled by default)
//! - `yaml` - load `ReaderConfig` from YAML
//! - `toml` - load `ReaderConfig` from TOML
//! - `async` - `AsyncReaderHandle` and `AsyncRowProvider` on Tokio
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - argument parsing for the `rowloop` binary

// Core modules
pub mod cli;
pub mod config;
pub mod error;
pub mod handle;
pub mod io;
pub mod reader;
pub mod split;

#[cfg(feature = "async")]
pub mod handle_async;

// Re-exports for convenience
pub use config::{ConfigError, ReaderConfig, ReaderOptions};
pub use error::{ErrorClass, ReaderError};
pub use handle::ReaderHandle;
pub use io::{FileSource, InMemorySource, LineCursor, Scan, SourceProvider, open_file};
pub use reader::{CyclicReader, RowProvider};
pub use split::{Row, split_fields};

#[cfg(feature = "async")]
pub use handle_async::{AsyncReaderHandle, AsyncRowProvider};

#[cfg(feature = "miette")]
pub use error::ReaderDiagnostic;
