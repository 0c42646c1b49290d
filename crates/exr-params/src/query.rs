//! URL query construction from validated parameters.

use exr_types::Lang;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Parameters that only steer the client and are never sent to the service.
pub const CLIENT_ONLY_FIELDS: &[&str] = &["output", "path"];

/// Error building a query string.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The parameters could not be serialized.
    #[error("failed to serialize parameters: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The parameters did not serialize to an object.
    #[error("parameters must serialize to an object")]
    NotAnObject,

    /// A field holds a value with no query representation.
    #[error("field {0:?} cannot be encoded in a query string")]
    Unsupported(String),
}

/// Builds the query string for a request.
///
/// Fields keep their serialization order, except `lang` which always comes
/// first and falls back to `default_lang`. Client-only fields and nulls are
/// dropped; arrays become repeated keys.
///
/// # Errors
///
/// Returns [`QueryError`] if `params` is not a flat object.
pub fn build_query<P: Serialize + ?Sized>(
    params: &P,
    default_lang: Lang,
) -> Result<String, QueryError> {
    let Value::Object(fields) = serde_json::to_value(params)? else {
        return Err(QueryError::NotAnObject);
    };

    let lang = match fields.get("lang") {
        Some(Value::String(lang)) => lang.clone(),
        _ => default_lang.as_str().to_string(),
    };

    let mut pairs = vec![("lang".to_string(), lang)];
    for (key, value) in fields
        .iter()
        .filter(|(key, _)| key.as_str() != "lang" && !CLIENT_ONLY_FIELDS.contains(&key.as_str()))
    {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar(key, item)? {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            _ => {
                if let Some(text) = scalar(key, value)? {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }

    Ok(pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&"))
}

fn scalar(key: &str, value: &Value) -> Result<Option<String>, QueryError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(_) | Value::Object(_) => Err(QueryError::Unsupported(key.to_string())),
    }
}
