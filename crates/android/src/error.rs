//! Error types for Android build configuration

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while evaluating build configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The properties file exists but could not be read
    #[error("Failed to read properties file {path}: {source}")]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A non-comment line in the properties file has no `=` separator
    #[error("Malformed properties file {path}: line {line} has no '=' separator")]
    MalformedLine {
        /// Path of the offending file
        path: PathBuf,
        /// 1-based line number
        line: usize,
    },

    /// JSON serialization of a config model failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Command completed successfully
    pub const SUCCESS: i32 = 0;
    /// Command failed
    pub const FAILURE: i32 = 1;
    /// Configuration could not be evaluated
    pub const CONFIG_ERROR: i32 = 3;
}
