//! Validators turning untrusted input into typed, defaulted values.

use exr_currencies::CurrencyRegistry;
use exr_types::{
    BaseRequestParams, DEFAULT_REQUEST_TIMEOUT, DailyRatesRequestParams, Options, ValidationError,
};
use serde_json::Value;

use crate::rules::{self, Fields};

/// Validates an untyped value into a typed one.
///
/// Validation is fail-fast: the first violation is returned.
pub trait Validator {
    /// The validated, fully-defaulted value.
    type Output;

    /// Validates `raw`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    fn validate(&self, raw: &Value) -> Result<Self::Output, ValidationError>;
}

const OPTION_FIELDS: &[&str] = &[rules::LANG, rules::OUTPUT, rules::REQUEST_TIMEOUT_MS];
const BASE_FIELDS: &[&str] = &[rules::LANG, rules::OUTPUT, rules::PATH];
const DAILY_FIELDS: &[&str] = &[
    rules::LANG,
    rules::OUTPUT,
    rules::PATH,
    rules::REFERENCE_DATE,
    rules::BASE_CURRENCY_ISO_CODES,
    rules::CURRENCY_ISO_CODE,
];

/// Validates provider options `{lang, output, requestTimeoutMs}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionValidator;

impl Validator for OptionValidator {
    type Output = Options;

    fn validate(&self, raw: &Value) -> Result<Options, ValidationError> {
        let empty = Fields::new();
        let fields = rules::object(raw, &empty)?;

        let lang = rules::lang(fields)?;
        let output = rules::output(fields)?;
        let timeout = rules::request_timeout_ms(fields)?;
        rules::reject_unknown(fields, OPTION_FIELDS)?;

        Ok(Options::new(
            lang,
            output,
            timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        ))
    }
}

/// Validates the parameters shared by every rates request `{lang, output, path}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseRequestParamsValidator;

impl BaseRequestParamsValidator {
    fn check(fields: &Fields) -> Result<BaseRequestParams, ValidationError> {
        let lang = rules::lang(fields)?;
        let output = rules::output(fields)?;
        let path = rules::path(fields, output)?;
        BaseRequestParams::new(lang, output, path)
    }
}

impl Validator for BaseRequestParamsValidator {
    type Output = BaseRequestParams;

    fn validate(&self, raw: &Value) -> Result<BaseRequestParams, ValidationError> {
        let empty = Fields::new();
        let fields = rules::object(raw, &empty)?;

        let params = Self::check(fields)?;
        rules::reject_unknown(fields, BASE_FIELDS)?;
        Ok(params)
    }
}

/// Validates daily-rates parameters against a currency reference table.
#[derive(Debug, Clone, Copy)]
pub struct DailyRatesRequestParamsValidator<'a> {
    currencies: &'a CurrencyRegistry,
}

impl<'a> DailyRatesRequestParamsValidator<'a> {
    /// Creates a validator checking base currencies against `currencies`.
    #[must_use]
    pub const fn new(currencies: &'a CurrencyRegistry) -> Self {
        Self { currencies }
    }
}

impl DailyRatesRequestParamsValidator<'static> {
    /// Creates a validator backed by the embedded reference table.
    #[must_use]
    pub fn global() -> Self {
        Self::new(CurrencyRegistry::global())
    }
}

impl Validator for DailyRatesRequestParamsValidator<'_> {
    type Output = DailyRatesRequestParams;

    fn validate(&self, raw: &Value) -> Result<DailyRatesRequestParams, ValidationError> {
        let empty = Fields::new();
        let fields = rules::object(raw, &empty)?;

        let base = BaseRequestParamsValidator::check(fields)?;
        let reference_date = rules::reference_date(fields)?;
        let codes = rules::base_currency_iso_codes(fields, self.currencies)?;
        let quote = rules::currency_iso_code(fields)?;
        rules::reject_unknown(fields, DAILY_FIELDS)?;

        DailyRatesRequestParams::new(base, reference_date, codes, quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use exr_types::{CurrencyInfo, Lang, MediaType, QuoteCurrency};
    use serde_json::json;
    use std::path::Path;

    fn daily(raw: Value) -> Result<DailyRatesRequestParams, ValidationError> {
        DailyRatesRequestParamsValidator::global().validate(&raw)
    }

    #[test]
    fn test_option_defaults() {
        let options = OptionValidator.validate(&json!({})).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.lang(), Lang::En);
        assert_eq!(options.output(), MediaType::Json);
        assert_eq!(options.request_timeout_ms(), 3000);

        let from_null = OptionValidator.validate(&Value::Null).unwrap();
        assert_eq!(from_null, Options::default());
    }

    #[test]
    fn test_option_defaults_fill_any_subset() {
        let provided = [
            ("lang", json!("it")),
            ("output", json!("application/pdf")),
            ("requestTimeoutMs", json!(1200)),
        ];

        for mask in 0..8u8 {
            let mut raw = serde_json::Map::new();
            for (i, (key, value)) in provided.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    raw.insert((*key).to_string(), value.clone());
                }
            }

            let options = OptionValidator.validate(&Value::Object(raw)).unwrap();
            let lang = if mask & 1 != 0 { Lang::It } else { Lang::En };
            let output = if mask & 2 != 0 { MediaType::Pdf } else { MediaType::Json };
            let timeout = if mask & 4 != 0 { 1200 } else { 3000 };
            assert_eq!(options.lang(), lang, "mask {mask}");
            assert_eq!(options.output(), output, "mask {mask}");
            assert_eq!(options.request_timeout_ms(), timeout, "mask {mask}");
        }
    }

    #[test]
    fn test_option_negative_timeout() {
        let err = OptionValidator
            .validate(&json!({"requestTimeoutMs": -3}))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"requestTimeoutMs\" must be a positive number"
        );
    }

    #[test]
    fn test_option_unknown_field() {
        let err = OptionValidator.validate(&json!({"a": 1})).unwrap_err();
        assert_eq!(err.to_string(), "\"a\" is not allowed");
    }

    #[test]
    fn test_option_values_kept() {
        let options = OptionValidator
            .validate(&json!({"lang": "IT", "output": "text/csv", "requestTimeoutMs": 500}))
            .unwrap();
        assert_eq!(options.lang(), Lang::It);
        assert_eq!(options.output(), MediaType::Csv);
        assert_eq!(options.request_timeout_ms(), 500);
    }

    #[test]
    fn test_option_rejects_non_object() {
        assert_eq!(
            OptionValidator.validate(&json!("en")).unwrap_err(),
            ValidationError::NotAnObject
        );
    }

    #[test]
    fn test_base_defaults() {
        let params = BaseRequestParamsValidator.validate(&json!({})).unwrap();
        assert_eq!(params.lang(), Lang::En);
        assert_eq!(params.output(), MediaType::Json);
        assert_eq!(params.path(), None);
    }

    #[test]
    fn test_base_unknown_field() {
        let err = BaseRequestParamsValidator
            .validate(&json!({"a": 1}))
            .unwrap_err();
        assert_eq!(err.to_string(), "\"a\" is not allowed");
    }

    #[test]
    fn test_base_binary_needs_path() {
        let err = BaseRequestParamsValidator
            .validate(&json!({"output": "text/csv"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "\"path\" is required");

        let params = BaseRequestParamsValidator
            .validate(&json!({"output": "text/csv", "path": "/tmp/latest.csv"}))
            .unwrap();
        assert_eq!(params.output(), MediaType::Csv);
        assert_eq!(params.path(), Some(Path::new("/tmp/latest.csv")));
    }

    #[test]
    fn test_base_invalid_lang_and_output() {
        let err = BaseRequestParamsValidator
            .validate(&json!({"lang": "fr"}))
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidValue("lang".into()));

        let err = BaseRequestParamsValidator
            .validate(&json!({"lang": 7}))
            .unwrap_err();
        assert_eq!(err.to_string(), "\"lang\" must be a string");

        let err = BaseRequestParamsValidator
            .validate(&json!({"output": "text/html"}))
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidValue("output".into()));
    }

    #[test]
    fn test_daily_missing_reference_date_first() {
        let err = daily(json!({"a": 1})).unwrap_err();
        assert_eq!(err.to_string(), "\"referenceDate\" is required");
    }

    #[test]
    fn test_daily_bad_dates() {
        let base = json!({"baseCurrencyIsoCodes": "USD", "currencyIsoCode": "EUR"});
        let with_date = |date: Value| {
            let mut raw = base.clone();
            raw["referenceDate"] = date;
            daily(raw)
        };

        for bad in ["2020-10-am", "2020-10-51"] {
            let err = with_date(json!(bad)).unwrap_err();
            assert_eq!(err.to_string(), "\"referenceDate\" contains an invalid value");
        }

        let err = with_date(json!(2021)).unwrap_err();
        assert_eq!(err.to_string(), "\"referenceDate\" must be a string");
    }

    #[test]
    fn test_daily_valid() {
        let params = daily(json!({
            "referenceDate": "2020-10-22",
            "baseCurrencyIsoCodes": "USD",
            "currencyIsoCode": "EUR",
        }))
        .unwrap();

        assert_eq!(params.base().lang(), Lang::En);
        assert_eq!(params.base().output(), MediaType::Json);
        assert_eq!(
            params.reference_date(),
            NaiveDate::from_ymd_opt(2020, 10, 22).unwrap()
        );
        assert_eq!(params.base_currency_iso_codes(), ["USD"]);
        assert_eq!(params.currency_iso_code(), QuoteCurrency::Eur);

        let params = daily(json!({
            "referenceDate": "2020-10-22",
            "baseCurrencyIsoCodes": "EUR",
            "currencyIsoCode": "USD",
        }))
        .unwrap();
        assert_eq!(params.base_currency_iso_codes(), ["EUR"]);
        assert_eq!(params.currency_iso_code(), QuoteCurrency::Usd);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "lang": "en",
                "output": "application/json",
                "referenceDate": "2020-10-22",
                "baseCurrencyIsoCodes": ["EUR"],
                "currencyIsoCode": "USD",
            })
        );
    }

    #[test]
    fn test_daily_unknown_field_after_known_ones() {
        let err = daily(json!({
            "referenceDate": "2020-10-22",
            "baseCurrencyIsoCodes": ["USD", "GBP"],
            "currencyIsoCode": "USD",
            "extra": true,
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::FieldNotAllowed("extra".into()));
    }

    #[test]
    fn test_daily_quote_currency() {
        let err = daily(json!({
            "referenceDate": "2020-10-22",
            "baseCurrencyIsoCodes": "USD",
            "currencyIsoCode": "GBP",
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidValue("currencyIsoCode".into()));

        let err = daily(json!({
            "referenceDate": "2020-10-22",
            "baseCurrencyIsoCodes": "USD",
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "\"currencyIsoCode\" is required");
    }

    #[test]
    fn test_daily_uses_given_table() {
        let table = CurrencyRegistry::from_entries([CurrencyInfo::new("GBP", "Pound", "826", 2)]);
        let validator = DailyRatesRequestParamsValidator::new(&table);
        let raw = json!({
            "referenceDate": "2020-10-22",
            "baseCurrencyIsoCodes": "USD",
            "currencyIsoCode": "EUR",
        });
        assert_eq!(
            validator.validate(&raw).unwrap_err(),
            ValidationError::InvalidValue("baseCurrencyIsoCodes".into())
        );
    }
}
