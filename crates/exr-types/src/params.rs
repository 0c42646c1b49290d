//! Provider options and validated request parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::{CurrencyParseError, Lang, MediaType, ValidationError};

/// Request timeout applied when none is configured, in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 3000;

/// [`DEFAULT_REQUEST_TIMEOUT_MS`] as a non-zero value.
pub const DEFAULT_REQUEST_TIMEOUT: NonZeroU64 = match NonZeroU64::new(DEFAULT_REQUEST_TIMEOUT_MS) {
    Some(timeout) => timeout,
    None => panic!("default timeout must be positive"),
};

/// Options of a provider instance.
///
/// Created once and immutable afterwards. The timeout is strictly positive
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    lang: Lang,
    output: MediaType,
    request_timeout_ms: NonZeroU64,
}

impl Options {
    /// Creates new options.
    #[must_use]
    pub const fn new(lang: Lang, output: MediaType, request_timeout_ms: NonZeroU64) -> Self {
        Self {
            lang,
            output,
            request_timeout_ms,
        }
    }

    /// Returns the default language.
    #[must_use]
    pub const fn lang(&self) -> Lang {
        self.lang
    }

    /// Returns the default output representation.
    #[must_use]
    pub const fn output(&self) -> MediaType {
        self.output
    }

    /// Returns the request timeout in milliseconds.
    #[must_use]
    pub const fn request_timeout_ms(&self) -> u64 {
        self.request_timeout_ms.get()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.get())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new(Lang::En, MediaType::Json, DEFAULT_REQUEST_TIMEOUT)
    }
}

/// Currency the daily rates are expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuoteCurrency {
    /// Euro.
    #[default]
    Eur,
    /// US dollar.
    Usd,
    /// Italian lira.
    Itl,
}

impl QuoteCurrency {
    /// Returns the ISO code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Itl => "ITL",
        }
    }
}

impl std::fmt::Display for QuoteCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuoteCurrency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "ITL" => Ok(Self::Itl),
            _ => Err(CurrencyParseError(s.to_string())),
        }
    }
}

/// Validated parameters shared by every rates request.
///
/// `path` is present whenever `output` is not JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRequestParams {
    lang: Lang,
    output: MediaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
}

impl BaseRequestParams {
    /// Creates new parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredField`] if `output` is a
    /// binary representation and no `path` is given.
    pub fn new(
        lang: Lang,
        output: MediaType,
        path: Option<PathBuf>,
    ) -> Result<Self, ValidationError> {
        if output.is_binary() && path.is_none() {
            return Err(ValidationError::MissingRequiredField("path".to_string()));
        }
        Ok(Self { lang, output, path })
    }

    /// Returns the language.
    #[must_use]
    pub const fn lang(&self) -> Lang {
        self.lang
    }

    /// Returns the requested representation.
    #[must_use]
    pub const fn output(&self) -> MediaType {
        self.output
    }

    /// Returns the destination of a binary body.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for BaseRequestParams {
    fn default() -> Self {
        Self {
            lang: Lang::En,
            output: MediaType::Json,
            path: None,
        }
    }
}

/// Validated parameters of a daily-rates request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRatesRequestParams {
    #[serde(flatten)]
    base: BaseRequestParams,
    reference_date: NaiveDate,
    base_currency_iso_codes: Vec<String>,
    currency_iso_code: QuoteCurrency,
}

impl DailyRatesRequestParams {
    /// Creates new parameters.
    ///
    /// Codes are uppercased but not checked against the reference table;
    /// untrusted input goes through the daily-rates validator instead.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredField`] if no base currency
    /// is given.
    pub fn new(
        base: BaseRequestParams,
        reference_date: NaiveDate,
        base_currency_iso_codes: Vec<String>,
        currency_iso_code: QuoteCurrency,
    ) -> Result<Self, ValidationError> {
        if base_currency_iso_codes.is_empty() {
            return Err(ValidationError::MissingRequiredField(
                "baseCurrencyIsoCodes".to_string(),
            ));
        }
        Ok(Self {
            base,
            reference_date,
            base_currency_iso_codes: base_currency_iso_codes
                .into_iter()
                .map(|c| c.to_uppercase())
                .collect(),
            currency_iso_code,
        })
    }

    /// Returns the shared parameters.
    #[must_use]
    pub const fn base(&self) -> &BaseRequestParams {
        &self.base
    }

    /// Returns the quotation date.
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Returns the currencies whose rates are requested.
    #[must_use]
    pub fn base_currency_iso_codes(&self) -> &[String] {
        &self.base_currency_iso_codes
    }

    /// Returns the currency the rates are expressed against.
    #[must_use]
    pub const fn currency_iso_code(&self) -> QuoteCurrency {
        self.currency_iso_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert_eq!(options.lang(), Lang::En);
        assert_eq!(options.output(), MediaType::Json);
        assert_eq!(options.request_timeout_ms(), 3000);
        assert_eq!(options.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_options_reject_zero_timeout() {
        let raw = json!({"lang": "en", "output": "application/json", "requestTimeoutMs": 0});
        assert!(serde_json::from_value::<Options>(raw).is_err());
    }

    #[test]
    fn test_binary_output_needs_path() {
        let err = BaseRequestParams::new(Lang::En, MediaType::Csv, None).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField("path".into()));

        let params =
            BaseRequestParams::new(Lang::En, MediaType::Csv, Some("/tmp/rates.csv".into()))
                .unwrap();
        assert_eq!(params.path(), Some(Path::new("/tmp/rates.csv")));
    }

    #[test]
    fn test_quote_currency_parse() {
        assert_eq!("usd".parse::<QuoteCurrency>().unwrap(), QuoteCurrency::Usd);
        assert_eq!("ITL".parse::<QuoteCurrency>().unwrap(), QuoteCurrency::Itl);
        assert!("GBP".parse::<QuoteCurrency>().is_err());
    }

    #[test]
    fn test_daily_params_serialize_flat() {
        let params = DailyRatesRequestParams::new(
            BaseRequestParams::default(),
            NaiveDate::from_ymd_opt(2020, 10, 22).unwrap(),
            vec!["usd".to_string()],
            QuoteCurrency::Eur,
        )
        .unwrap();

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "lang": "en",
                "output": "application/json",
                "referenceDate": "2020-10-22",
                "baseCurrencyIsoCodes": ["USD"],
                "currencyIsoCode": "EUR",
            })
        );
    }

    #[test]
    fn test_daily_params_need_a_currency() {
        let err = DailyRatesRequestParams::new(
            BaseRequestParams::default(),
            NaiveDate::from_ymd_opt(2020, 10, 22).unwrap(),
            Vec::new(),
            QuoteCurrency::Usd,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("baseCurrencyIsoCodes"));
    }
}
