//! Provider errors.

use exr_params::QueryError;
use exr_types::ValidationError;
use thiserror::Error;

/// Errors returned by the provider.
#[derive(Error, Debug)]
pub enum ExrError {
    /// The provider options were rejected.
    #[error("invalid options: {0}")]
    InvalidOption(#[source] ValidationError),

    /// The request parameters were rejected.
    #[error("{0}")]
    InvalidParams(#[source] ValidationError),

    /// The requested representation has no handling mode.
    #[error("format {0} unsupported")]
    UnsupportedFormat(String),

    /// A binary representation was requested without a destination file.
    #[error("you must specify the filename for CSV, XLS and PDF")]
    MissingOutputPath,

    /// The query string could not be built.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Network failure or timeout.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Writing the response body failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON envelope could not be parsed.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExrError {
    /// Returns true if the request exceeded the configured timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Returns true if the failure happened before any network activity.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidOption(_)
                | Self::InvalidParams(_)
                | Self::UnsupportedFormat(_)
                | Self::MissingOutputPath
        )
    }
}
