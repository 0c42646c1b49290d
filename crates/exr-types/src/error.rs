//! Error types for exr.

use thiserror::Error;

/// A single rejected field, reported by the parameter validators.
///
/// Validation is fail-fast: only the first violated rule is reported.
/// Messages name the offending field between double quotes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A key outside the schema was supplied.
    #[error("\"{0}\" is not allowed")]
    FieldNotAllowed(String),

    /// A required field is absent.
    #[error("\"{0}\" is required")]
    MissingRequiredField(String),

    /// The field has the right type but fails a semantic check.
    #[error("\"{0}\" contains an invalid value")]
    InvalidValue(String),

    /// The field is present with the wrong underlying type.
    #[error("\"{field}\" must be a {expected}")]
    WrongType {
        /// The offending field.
        field: String,
        /// The expected type, e.g. `"string"`.
        expected: &'static str,
    },

    /// The field must be an integer.
    #[error("\"{0}\" must be an integer")]
    NotInteger(String),

    /// The field must be strictly positive.
    #[error("\"{0}\" must be a positive number")]
    NotPositive(String),

    /// The input is not an object.
    #[error("value must be of type object")]
    NotAnObject,
}

impl ValidationError {
    /// Returns the name of the offending field, if the error concerns one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::FieldNotAllowed(field)
            | Self::MissingRequiredField(field)
            | Self::InvalidValue(field)
            | Self::WrongType { field, .. }
            | Self::NotInteger(field)
            | Self::NotPositive(field) => Some(field),
            Self::NotAnObject => None,
        }
    }

    /// Creates a [`ValidationError::WrongType`] for the given field.
    #[must_use]
    pub fn wrong_type(field: &str, expected: &'static str) -> Self {
        Self::WrongType {
            field: field.to_string(),
            expected,
        }
    }
}

/// Error returned when parsing an invalid quote currency.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid quote currency '{0}', expected one of: EUR, USD, ITL")]
pub struct CurrencyParseError(pub(crate) String);
