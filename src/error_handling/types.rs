//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for configuration loading.
///
/// Configuration failure is fatal to the run: without a site list and a
/// notification credential there is nothing to check and nowhere to report.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration document could not be read.
    #[error("Failed to read configuration from {}: {source}", .path.display())]
    ReadError {
        /// Path of the document that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The configuration document could not be parsed.
    #[error("Failed to parse configuration document: {0}")]
    ParseError(#[from] serde_json::Error),
}
