//! Error types for the volume generator CLI.

use std::path::PathBuf;
use thiserror::Error;
use volume_core::SeriesError;

/// Configuration file error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generation or output error
    #[error(transparent)]
    Series(#[from] SeriesError),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
