//! Core types for the exr Bank of Italy exchange-rate client.
//!
//! This crate provides the data model shared by the exr workspace:
//!
//! - [`Lang`] - Language of names and messages returned by the service
//! - [`MediaType`] - Requested response representation (JSON, PDF, CSV, XLS)
//! - [`QuoteCurrency`] - Currency the daily rates are expressed against
//! - [`Options`] - Validated provider options
//! - [`BaseRequestParams`] / [`DailyRatesRequestParams`] - Validated request parameters
//! - [`LatestRates`] / [`DailyRates`] / [`Currencies`] - Normalized response envelopes
//! - [`CurrencyInfo`] - Row of the static currency reference table
//! - [`ValidationError`] - Field-level validation failures

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/exr-rs/exr/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod currency;
mod error;
mod lang;
mod media_type;
pub mod numeric;
mod params;
mod rates;

pub use currency::{Country, Currencies, Currency, CurrencyInfo};
pub use error::{CurrencyParseError, ValidationError};
pub use lang::{Lang, LangParseError};
pub use media_type::{MediaType, MediaTypeParseError};
pub use params::{
    BaseRequestParams, DEFAULT_REQUEST_TIMEOUT, DEFAULT_REQUEST_TIMEOUT_MS, DailyRatesRequestParams,
    Options, QuoteCurrency,
};
pub use rates::{DailyRate, DailyRates, LatestRate, LatestRates, ResultsInfo};
