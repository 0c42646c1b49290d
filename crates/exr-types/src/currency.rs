//! Currency definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ResultsInfo;

/// Entry of the static ISO 4217 reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    /// ISO 4217 alphabetic code (e.g., "EUR").
    iso_code: String,
    /// English name (e.g., "Euro").
    name: String,
    /// ISO 4217 numeric code, zero-padded (e.g., "978").
    numeric_code: String,
    /// Number of digits after the decimal separator.
    minor_unit: u8,
}

impl CurrencyInfo {
    /// Creates a new reference table entry.
    #[must_use]
    pub fn new(
        iso_code: impl Into<String>,
        name: impl Into<String>,
        numeric_code: impl Into<String>,
        minor_unit: u8,
    ) -> Self {
        Self {
            iso_code: iso_code.into(),
            name: name.into(),
            numeric_code: numeric_code.into(),
            minor_unit,
        }
    }

    /// Returns the ISO 4217 alphabetic code.
    #[must_use]
    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    /// Returns the English name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ISO 4217 numeric code.
    #[must_use]
    pub fn numeric_code(&self) -> &str {
        &self.numeric_code
    }

    /// Returns the number of minor-unit digits.
    #[must_use]
    pub const fn minor_unit(&self) -> u8 {
        self.minor_unit
    }
}

impl std::fmt::Display for CurrencyInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.iso_code)
    }
}

/// Country adopting a currency, with the validity period of the adoption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// ISO code of the currency.
    #[serde(rename = "currencyISO")]
    pub currency_iso: String,
    /// Country name.
    pub country: String,
    /// ISO code of the country.
    #[serde(rename = "countryISO", default)]
    pub country_iso: Option<String>,
    /// First day the currency was valid in the country.
    #[serde(default)]
    pub validity_start_date: Option<String>,
    /// Last day the currency was valid in the country.
    ///
    /// `None` while still valid. An absent key reads the same as `null`.
    #[serde(default)]
    pub validity_end_date: Option<String>,
}

impl Country {
    /// Returns true if the currency is still legal tender in this country.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.validity_end_date.is_none()
    }
}

/// Currency known to the service, including expired ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Countries that adopted the currency.
    pub countries: Vec<Country>,
    /// ISO code.
    pub iso_code: String,
    /// Display name in the requested language.
    pub name: String,
    /// Whether the service can chart the currency.
    pub graph: bool,
}

impl Currency {
    /// Returns true if at least one country still uses the currency.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.countries.iter().any(Country::is_valid)
    }
}

/// Response of the `currencies` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currencies {
    /// Response metadata.
    pub results_info: ResultsInfo,
    /// All currencies, including expired ones.
    pub currencies: Vec<Currency>,
}

impl Currencies {
    /// Reduces the list to a mapping from ISO code to name, keeping active
    /// currencies only.
    #[must_use]
    pub fn simplified(&self) -> BTreeMap<String, String> {
        self.currencies
            .iter()
            .filter(|c| c.is_active())
            .map(|c| (c.iso_code.clone(), c.name.clone()))
            .collect()
    }
}
