//! Configuration types for opening readers.
//!
//! This module provides:
//! - `ReaderOptions`: Buffering and line-length limits for the scanner
//! - `ReaderConfig`: A complete, deserializable description of one reader
//! - `ConfigError`: Failures while loading a configuration file

mod options;
mod reader;

pub use options::ReaderOptions;
pub use reader::{ConfigError, ReaderConfig};
