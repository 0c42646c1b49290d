//! Formatting errors.

use thiserror::Error;

/// Errors that can occur while writing or reading JSON documents.
#[derive(Error, Debug)]
pub enum FormatError {
    /// No destination file was given.
    #[error("please specify a filename")]
    MissingPath,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
