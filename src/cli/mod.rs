//! CLI integration helpers for rowloop.
//!
//! This module turns command-line arguments into a [`ReaderConfig`] and
//! drives a pool of worker threads that share one reader, the way a load
//! generator would.
//!
//! # Example with sarge
//!
//! ```rust,ignore
//! use rowloop::cli::{CliArgs, SeparatorArg, drive};
//! use sarge::prelude::*;
//!
//! let mut reader = ArgumentReader::new();
//! let sep_ref = reader.add::<SeparatorArg>(tag::both('s', "separator"));
//! let args = reader.parse()?;
//! ```

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{ConfigError, ReaderConfig};
use crate::error::ReaderError;
use crate::reader::RowProvider;
use crate::split::Row;

#[cfg(feature = "sarge")]
mod sarge;

/// Arguments accepted by the `rowloop` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Data file path. Overrides the path from `config`.
    pub file: Option<String>,
    /// Config file (JSON, YAML or TOML by extension).
    pub config: Option<String>,
    /// Field separator. Overrides the separator from `config`.
    pub separator: Option<SeparatorArg>,
    /// Total number of rows to draw across all workers.
    pub count: usize,
    /// Number of concurrent workers sharing the reader.
    pub workers: usize,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            file: None,
            config: None,
            separator: None,
            count: 10,
            workers: 1,
        }
    }
}

/// Why [`drive`] stopped early.
#[derive(Debug, thiserror::Error)]
pub enum DriveError {
    #[error(transparent)]
    Reader(#[from] ReaderError),

    /// The sink could not take a row, e.g. stdout was closed.
    #[error("cannot write row: {0}")]
    Sink(#[source] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing --file or --config")]
    MissingSource,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(SeparatorArg(separator.into()));
        self
    }

    /// Merge the config file (if any) with the explicit flags.
    pub fn reader_config(&self) -> Result<ReaderConfig, CliError> {
        let mut config = match (&self.config, &self.file) {
            (Some(path), _) => ReaderConfig::from_path(Path::new(path))?,
            (None, Some(file)) => ReaderConfig::new(file),
            (None, None) => return Err(CliError::MissingSource),
        };
        if let Some(file) = &self.file {
            config.path = file.into();
        }
        if let Some(sep) = &self.separator {
            config.separator = sep.0.clone();
        }
        Ok(config)
    }
}

/// A field separator given on the command line.
///
/// Accepts the literal separator, the escapes `\t` and `\\`, or one of the
/// names `tab`, `comma`, `semicolon`, `pipe`, `space`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorArg(pub String);

impl SeparatorArg {
    pub fn parse(token: &str) -> Self {
        let sep = match token.to_ascii_lowercase().as_str() {
            "tab" => "\t".to_string(),
            "comma" => ",".to_string(),
            "semicolon" => ";".to_string(),
            "pipe" => "|".to_string(),
            "space" => " ".to_string(),
            _ => token.replace("\\t", "\t").replace("\\\\", "\\"),
        };
        SeparatorArg(sep)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SeparatorArg {
    fn default() -> Self {
        SeparatorArg(",".to_string())
    }
}

/// Draw `count` rows in total from `provider` using `workers` threads.
///
/// Each row is passed to `sink` together with the index of the worker that
/// drew it. Returns the number of rows handed to the sink, or the first
/// error any worker hit, from the reader or from the sink; workers stop as
/// soon as one of them fails.
pub fn drive<P, F>(
    provider: &P,
    separator: &str,
    count: usize,
    workers: usize,
    sink: F,
) -> Result<usize, DriveError>
where
    P: RowProvider + ?Sized,
    F: Fn(usize, Row) -> std::io::Result<()> + Sync,
{
    let issued = AtomicUsize::new(0);
    let drawn = AtomicUsize::new(0);
    let sink = &sink;

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..workers.max(1))
            .map(|worker| {
                let issued = &issued;
                let drawn = &drawn;
                s.spawn(move || -> Result<(), DriveError> {
                    while issued.fetch_add(1, Ordering::Relaxed) < count {
                        let result = provider
                            .next_row(separator)
                            .map_err(DriveError::from)
                            .and_then(|row| sink(worker, row).map_err(DriveError::Sink));
                        if let Err(e) = result {
                            // stop the other workers
                            issued.store(count, Ordering::Relaxed);
                            return Err(e);
                        }
                        drawn.fetch_add(1, Ordering::Relaxed);
                    }
                    Ok(())
                })
            })
            .collect();

        let mut first_err = None;
        for h in handles {
            match h.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    if first_err.is_none() {
                        first_err = Some(e);
                    }
                }
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        first_err.map_or(Ok(()), Err)
    })?;

    Ok(drawn.load(Ordering::Relaxed))
}
