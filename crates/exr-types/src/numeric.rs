//! Numeric-as-text normalization.
//!
//! The service sends rates such as `eurRate`, `usdRate` and `avgRate` as JSON
//! strings. Fields opt in one by one with a dedicated `deserialize_with`
//! function, so the set of coerced fields stays an explicit allowlist.
//!
//! A rate that is not a number (`"N.A."`, `null`) becomes `f64::NAN` and is
//! logged, so one odd record never discards the rest of a response.

use serde::{Deserialize, Deserializer};
use tracing::warn;

#[derive(Deserialize)]
#[serde(untagged)]
enum RateInput {
    Number(f64),
    Text(String),
    Missing(()),
}

/// Parses a rate expressed as text.
///
/// # Errors
///
/// Returns an error if the text is not a decimal number.
pub fn parse_rate(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    trimmed
        .parse::<f64>()
        .map_err(|e| format!("invalid rate '{value}': {e}"))
}

fn lenient_rate<'de, D>(field: &'static str, deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RateInput::deserialize(deserializer)? {
        RateInput::Number(n) => Ok(n),
        RateInput::Text(s) => Ok(parse_rate(&s).unwrap_or_else(|e| {
            warn!(field, value = %s, error = %e, "rate is not a number");
            f64::NAN
        })),
        RateInput::Missing(()) => {
            warn!(field, "rate is null");
            Ok(f64::NAN)
        }
    }
}

/// Deserializes `eurRate`.
///
/// # Errors
///
/// Returns a deserialization error if the value is neither a number, a
/// string nor `null`.
pub fn deserialize_eur_rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_rate("eurRate", deserializer)
}

/// Deserializes `usdRate`.
///
/// # Errors
///
/// Returns a deserialization error if the value is neither a number, a
/// string nor `null`.
pub fn deserialize_usd_rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_rate("usdRate", deserializer)
}

/// Deserializes `avgRate`.
///
/// # Errors
///
/// Returns a deserialization error if the value is neither a number, a
/// string nor `null`.
pub fn deserialize_avg_rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_rate("avgRate", deserializer)
}
