//! Response media types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Representation requested from the service.
///
/// Each variant maps to a fixed MIME string used as the `Accept` header.
/// JSON bodies are parsed; every other representation is streamed to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MediaType {
    /// `application/json`.
    #[default]
    #[serde(rename = "application/json")]
    Json,
    /// `application/pdf`.
    #[serde(rename = "application/pdf")]
    Pdf,
    /// `text/csv`.
    #[serde(rename = "text/csv")]
    Csv,
    /// `application/vnd.ms-excel`.
    #[serde(rename = "application/vnd.ms-excel")]
    Xls,
}

impl MediaType {
    /// Returns the MIME string.
    #[must_use]
    pub const fn mime(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Pdf => "application/pdf",
            Self::Csv => "text/csv",
            Self::Xls => "application/vnd.ms-excel",
        }
    }

    /// Returns the file extension for this media type.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pdf => "pdf",
            Self::Csv => "csv",
            Self::Xls => "xls",
        }
    }

    /// Returns true if the body must be written to a file rather than parsed.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        !matches!(self, Self::Json)
    }

    /// Looks up a media type by its exact MIME string.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.mime() == mime)
    }

    /// Returns all available media types.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Json, Self::Pdf, Self::Csv, Self::Xls]
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mime())
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "application/json" => Ok(Self::Json),
            "pdf" | "application/pdf" => Ok(Self::Pdf),
            "csv" | "text/csv" => Ok(Self::Csv),
            "xls" | "excel" | "application/vnd.ms-excel" => Ok(Self::Xls),
            _ => Err(MediaTypeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTypeParseError(String);

impl std::fmt::Display for MediaTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported format '{}', expected one of: json, pdf, csv, xls",
            self.0
        )
    }
}

impl std::error::Error for MediaTypeParseError {}
