//! Field rules shared by the validators.
//!
//! Each rule reads one field from the raw object and returns either the
//! normalized value (defaults applied) or the first violation. A JSON `null`
//! counts as an absent field.

use chrono::NaiveDate;
use exr_currencies::CurrencyRegistry;
use exr_types::{Lang, MediaType, QuoteCurrency, ValidationError};
use serde_json::{Map, Value};
use std::num::NonZeroU64;
use std::path::PathBuf;

pub(crate) type Fields = Map<String, Value>;

pub(crate) const LANG: &str = "lang";
pub(crate) const OUTPUT: &str = "output";
pub(crate) const PATH: &str = "path";
pub(crate) const REQUEST_TIMEOUT_MS: &str = "requestTimeoutMs";
pub(crate) const REFERENCE_DATE: &str = "referenceDate";
pub(crate) const BASE_CURRENCY_ISO_CODES: &str = "baseCurrencyIsoCodes";
pub(crate) const CURRENCY_ISO_CODE: &str = "currencyIsoCode";

/// Borrows the raw input as an object. `null` reads as an empty object.
pub(crate) fn object<'a>(raw: &'a Value, empty: &'a Fields) -> Result<&'a Fields, ValidationError> {
    match raw {
        Value::Object(fields) => Ok(fields),
        Value::Null => Ok(empty),
        _ => Err(ValidationError::NotAnObject),
    }
}

/// Fails on the first key, in input order, missing from `allowed`.
pub(crate) fn reject_unknown(fields: &Fields, allowed: &[&str]) -> Result<(), ValidationError> {
    match fields.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(ValidationError::FieldNotAllowed(key.clone())),
        None => Ok(()),
    }
}

fn present<'a>(fields: &'a Fields, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|value| !value.is_null())
}

fn text<'a>(fields: &'a Fields, name: &str) -> Result<Option<&'a str>, ValidationError> {
    match present(fields, name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ValidationError::wrong_type(name, "string")),
    }
}

fn required_text<'a>(fields: &'a Fields, name: &str) -> Result<&'a str, ValidationError> {
    text(fields, name)?.ok_or_else(|| ValidationError::MissingRequiredField(name.to_string()))
}

/// `lang`: `en` or `it`, case-insensitive, defaults to `en`.
pub(crate) fn lang(fields: &Fields) -> Result<Lang, ValidationError> {
    text(fields, LANG)?.map_or(Ok(Lang::default()), |s| {
        s.parse()
            .map_err(|_| ValidationError::InvalidValue(LANG.to_string()))
    })
}

/// `output`: a known media type, defaults to JSON.
pub(crate) fn output(fields: &Fields) -> Result<MediaType, ValidationError> {
    text(fields, OUTPUT)?.map_or(Ok(MediaType::default()), |s| {
        s.parse()
            .map_err(|_| ValidationError::InvalidValue(OUTPUT.to_string()))
    })
}

/// `path`: required unless `output` is JSON.
pub(crate) fn path(fields: &Fields, output: MediaType) -> Result<Option<PathBuf>, ValidationError> {
    match text(fields, PATH)? {
        Some("") => Err(ValidationError::InvalidValue(PATH.to_string())),
        Some(path) => Ok(Some(PathBuf::from(path))),
        None if output.is_binary() => Err(ValidationError::MissingRequiredField(PATH.to_string())),
        None => Ok(None),
    }
}

/// `requestTimeoutMs`: a positive integer, defaults to 3000.
///
/// Numeric strings are converted first.
pub(crate) fn request_timeout_ms(fields: &Fields) -> Result<Option<NonZeroU64>, ValidationError> {
    let Some(value) = present(fields, REQUEST_TIMEOUT_MS) else {
        return Ok(None);
    };

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| ValidationError::wrong_type(REQUEST_TIMEOUT_MS, "number"))?;

    if !number.is_finite() {
        return Err(ValidationError::wrong_type(REQUEST_TIMEOUT_MS, "number"));
    }
    if number.fract() != 0.0 {
        return Err(ValidationError::NotInteger(REQUEST_TIMEOUT_MS.to_string()));
    }
    if number <= 0.0 {
        return Err(ValidationError::NotPositive(REQUEST_TIMEOUT_MS.to_string()));
    }
    if number > u64::MAX as f64 {
        return Err(ValidationError::InvalidValue(REQUEST_TIMEOUT_MS.to_string()));
    }

    Ok(NonZeroU64::new(number as u64))
}

/// `referenceDate`: text in the `YYYY-MM-DD` shape naming a real calendar day.
///
/// The type is checked before the format, so a number reports a wrong type
/// while `2020-10-51` reports an invalid value.
pub(crate) fn reference_date(fields: &Fields) -> Result<NaiveDate, ValidationError> {
    let raw = required_text(fields, REFERENCE_DATE)?;
    let invalid = || ValidationError::InvalidValue(REFERENCE_DATE.to_string());

    if !has_date_shape(raw) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}

fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// `baseCurrencyIsoCodes`: one code, a comma-separated list or an array of
/// codes, each present in the reference table.
///
/// Codes are uppercased and deduplicated, keeping the first occurrence.
pub(crate) fn base_currency_iso_codes(
    fields: &Fields,
    currencies: &CurrencyRegistry,
) -> Result<Vec<String>, ValidationError> {
    let raw: Vec<&str> = match present(fields, BASE_CURRENCY_ISO_CODES) {
        None => {
            return Err(ValidationError::MissingRequiredField(
                BASE_CURRENCY_ISO_CODES.to_string(),
            ));
        }
        Some(Value::String(s)) => s.split(',').collect(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(|| ValidationError::wrong_type(BASE_CURRENCY_ISO_CODES, "string"))
            })
            .collect::<Result<_, _>>()?,
        Some(_) => return Err(ValidationError::wrong_type(BASE_CURRENCY_ISO_CODES, "string")),
    };

    let mut codes: Vec<String> = Vec::with_capacity(raw.len());
    for code in raw.into_iter().map(str::trim) {
        if !currencies.contains(code) {
            return Err(ValidationError::InvalidValue(
                BASE_CURRENCY_ISO_CODES.to_string(),
            ));
        }
        let code = code.to_uppercase();
        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    if codes.is_empty() {
        return Err(ValidationError::InvalidValue(
            BASE_CURRENCY_ISO_CODES.to_string(),
        ));
    }
    Ok(codes)
}

/// `currencyIsoCode`: `EUR`, `USD` or `ITL`.
pub(crate) fn currency_iso_code(fields: &Fields) -> Result<QuoteCurrency, ValidationError> {
    required_text(fields, CURRENCY_ISO_CODE)?
        .parse()
        .map_err(|_| ValidationError::InvalidValue(CURRENCY_ISO_CODE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test input must be an object"),
        }
    }

    #[test]
    fn test_null_counts_as_absent() {
        let f = fields(json!({"lang": null, "output": null}));
        assert_eq!(lang(&f).unwrap(), Lang::En);
        assert_eq!(output(&f).unwrap(), MediaType::Json);
    }

    #[test]
    fn test_reject_unknown_reports_first_in_input_order() {
        let f = fields(json!({"lang": "en", "zeta": 1, "alpha": 2}));
        assert_eq!(
            reject_unknown(&f, &[LANG]).unwrap_err(),
            ValidationError::FieldNotAllowed("zeta".into())
        );
    }

    #[test]
    fn test_date_shape() {
        assert!(has_date_shape("2020-10-22"));
        assert!(!has_date_shape("2020-10-am"));
        assert!(!has_date_shape("2020-1-22"));
        assert!(!has_date_shape("20201022"));
    }

    #[test]
    fn test_impossible_dates() {
        for raw in ["2020-10-51", "2021-02-29", "2020-13-01", "2020-00-10"] {
            let f = fields(json!({ "referenceDate": raw }));
            assert_eq!(
                reference_date(&f).unwrap_err(),
                ValidationError::InvalidValue(REFERENCE_DATE.into()),
                "{raw}"
            );
        }
        let leap = fields(json!({"referenceDate": "2020-02-29"}));
        assert!(reference_date(&leap).is_ok());
    }

    #[test]
    fn test_timeout_rules() {
        let check = |v: Value| request_timeout_ms(&fields(json!({ "requestTimeoutMs": v })));
        assert_eq!(check(json!(1500)).unwrap().map(NonZeroU64::get), Some(1500));
        assert_eq!(check(json!("2000")).unwrap().map(NonZeroU64::get), Some(2000));
        assert_eq!(
            check(json!(0)).unwrap_err(),
            ValidationError::NotPositive(REQUEST_TIMEOUT_MS.into())
        );
        assert_eq!(
            check(json!(12.5)).unwrap_err(),
            ValidationError::NotInteger(REQUEST_TIMEOUT_MS.into())
        );
        assert_eq!(
            check(json!(true)).unwrap_err(),
            ValidationError::wrong_type(REQUEST_TIMEOUT_MS, "number")
        );
    }

    #[test]
    fn test_currency_codes_forms() {
        let registry = CurrencyRegistry::global();
        let check = |v: Value| {
            base_currency_iso_codes(&fields(json!({ "baseCurrencyIsoCodes": v })), registry)
        };

        assert_eq!(check(json!("usd")).unwrap(), ["USD"]);
        assert_eq!(check(json!("USD, GBP,usd")).unwrap(), ["USD", "GBP"]);
        assert_eq!(check(json!(["CHF", "JPY"])).unwrap(), ["CHF", "JPY"]);
        assert_eq!(
            check(json!("XYZ")).unwrap_err(),
            ValidationError::InvalidValue(BASE_CURRENCY_ISO_CODES.into())
        );
        assert_eq!(
            check(json!([])).unwrap_err(),
            ValidationError::InvalidValue(BASE_CURRENCY_ISO_CODES.into())
        );
        assert_eq!(
            check(json!(["USD", 3])).unwrap_err(),
            ValidationError::wrong_type(BASE_CURRENCY_ISO_CODES, "string")
        );
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let f = fields(json!({"path": ""}));
        assert_eq!(
            path(&f, MediaType::Pdf).unwrap_err(),
            ValidationError::InvalidValue(PATH.into())
        );
    }
}
