//! Response language.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language used by the service for currency and country names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English.
    #[default]
    En,
    /// Italian.
    It,
}

impl Lang {
    /// Returns the language code sent over the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::It => "it",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Lang {
    type Err = LangParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "it" => Ok(Self::It),
            _ => Err(LangParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid language string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangParseError(String);

impl std::fmt::Display for LangParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid language '{}', expected one of: en, it", self.0)
    }
}

impl std::error::Error for LangParseError {}
