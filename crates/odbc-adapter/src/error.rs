//! Error types for configuration loading.

use std::path::PathBuf;

/// Errors raised while reading an adapter configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        /// Path to the configuration file.
        path: PathBuf,
        /// The IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for this schema.
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry references something that does not exist or does not
    /// compile.
    #[error("Invalid dialect entry '{pattern}': {message}")]
    Invalid {
        /// Pattern of the offending entry.
        pattern: String,
        /// What is wrong with it.
        message: String,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
