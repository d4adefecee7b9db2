//! Error handling module for the loxc driver.
//!
//! Lexical errors are not driver errors: they are reported as diagnostics
//! and only change the exit status. The variants here cover everything that
//! stops the driver before or while producing output.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the loxc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A source or configuration file could not be read.
    #[error("failed to read `{}`", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be set up.
    #[error("logging error: {0}")]
    Logging(String),

    /// JSON output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to stdout or stderr failed.
    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
