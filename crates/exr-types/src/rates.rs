//! Exchange-rate response envelopes.

use serde::{Deserialize, Serialize};

use crate::numeric::{deserialize_avg_rate, deserialize_eur_rate, deserialize_usd_rate};

/// Metadata attached to every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsInfo {
    /// Number of records in the payload.
    pub total_records: u64,
    /// Time zone the dates refer to.
    pub timezone_reference: String,
    /// Optional notice from the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Latest available rate for a currency, against the euro and the US dollar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestRate {
    /// Country name.
    #[serde(default)]
    pub country: Option<String>,
    /// Currency name.
    pub currency: String,
    /// ISO 4217 code.
    pub iso_code: String,
    /// Bank of Italy internal currency code.
    #[serde(default)]
    pub uic_code: String,
    /// Rate against the euro; NaN when the service sends no number.
    #[serde(deserialize_with = "deserialize_eur_rate")]
    pub eur_rate: f64,
    /// Rate against the US dollar; NaN when the service sends no number.
    #[serde(deserialize_with = "deserialize_usd_rate")]
    pub usd_rate: f64,
    /// Quotation convention against the dollar.
    #[serde(default)]
    pub usd_exchange_convention: String,
    /// Code of the quotation convention against the dollar.
    #[serde(default)]
    pub usd_exchange_convention_code: String,
    /// Quotation date (`YYYY-MM-DD`).
    pub reference_date: String,
}

/// Response of the `latestRates` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestRates {
    /// Response metadata.
    pub results_info: ResultsInfo,
    /// One rate per quoted currency.
    pub latest_rates: Vec<LatestRate>,
}

impl LatestRates {
    /// Finds the rate for the given ISO code (case-insensitive).
    #[must_use]
    pub fn find(&self, iso_code: &str) -> Option<&LatestRate> {
        self.latest_rates
            .iter()
            .find(|r| r.iso_code.eq_ignore_ascii_case(iso_code))
    }

    /// Returns the number of rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.latest_rates.len()
    }

    /// Returns true if there are no rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latest_rates.is_empty()
    }
}

/// Average daily rate for a currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRate {
    /// Country name.
    #[serde(default)]
    pub country: Option<String>,
    /// Currency name.
    pub currency: String,
    /// ISO 4217 code.
    pub iso_code: String,
    /// Bank of Italy internal currency code.
    #[serde(default)]
    pub uic_code: String,
    /// Average rate against the quote currency; NaN when the service sends
    /// no number.
    #[serde(deserialize_with = "deserialize_avg_rate")]
    pub avg_rate: f64,
    /// Quotation convention.
    #[serde(default)]
    pub exchange_convention: String,
    /// Code of the quotation convention.
    #[serde(default)]
    pub exchange_convention_code: String,
    /// Quotation date (`YYYY-MM-DD`).
    pub reference_date: String,
}

/// Response of the `dailyRates` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRates {
    /// Response metadata.
    pub results_info: ResultsInfo,
    /// One rate per requested currency.
    pub rates: Vec<DailyRate>,
}

impl DailyRates {
    /// Finds the rate for the given ISO code (case-insensitive).
    #[must_use]
    pub fn find(&self, iso_code: &str) -> Option<&DailyRate> {
        self.rates
            .iter()
            .find(|r| r.iso_code.eq_ignore_ascii_case(iso_code))
    }
}
