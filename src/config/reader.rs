//! Deserializable reader configuration.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::ReaderOptions;
use crate::error::ReaderError;
use crate::reader::CyclicReader;

fn default_separator() -> String {
    ",".to_string()
}

/// Configuration for a single cyclic reader.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReaderConfig {
    /// Path of the data file
    pub path: PathBuf,
    /// Field separator used when none is given per call
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Scanner options
    #[serde(default)]
    pub options: ReaderOptions,
}

/// Errors while loading a [`ReaderConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No enabled loader handles this file extension.
    #[error("unsupported config format for '{0}'")]
    UnsupportedFormat(String),
}

impl ReaderConfig {
    /// Create a configuration for `path` with the default separator and options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            separator: default_separator(),
            options: ReaderOptions::default(),
        }
    }

    /// Set the default separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.options.buffer_capacity = capacity;
        self
    }

    pub fn with_max_line_len(mut self, limit: Option<usize>) -> Self {
        self.options.max_line_len = limit;
        self
    }

    /// Open a reader as described by this configuration.
    pub fn open(&self) -> Result<CyclicReader<File>, ReaderError> {
        CyclicReader::open_with_options(&self.path, self.options)
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Parse(Box::new(e)))
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(s).map_err(|e| ConfigError::Parse(Box::new(e)))
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(Box::new(e)))
    }

    /// Load a configuration file, picking the loader from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().into_owned(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            #[cfg(feature = "json")]
            "json" => Self::from_json_str(&content),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml_str(&content),
            #[cfg(feature = "toml")]
            "toml" => Self::from_toml_str(&content),
            _ => {
                let _ = content;
                Err(ConfigError::UnsupportedFormat(
                    path.to_string_lossy().into_owned(),
                ))
            }
        }
    }
}
