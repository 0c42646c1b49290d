//! Client library for the Bank of Italy exchange-rate service.
//!
//! This is a facade crate that re-exports functionality from the exr
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use exr_lib::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bank = BankOfItaly::with_defaults()?;
//!
//!     let payload = bank
//!         .daily_rates(&json!({
//!             "referenceDate": "2020-10-22",
//!             "baseCurrencyIsoCodes": "USD",
//!             "currencyIsoCode": "EUR",
//!         }))
//!         .await?;
//!
//!     if let Some(rates) = payload.into_json() {
//!         to_json_file("dailyRates.json", &rates, true)?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/exr-rs/exr/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use exr_types::*;

// Re-export the currency reference table
pub use exr_currencies::{CurrencyRegistry, filter_currencies};

// Re-export validation
pub use exr_params::{
    BaseRequestParamsValidator, CLIENT_ONLY_FIELDS, DailyRatesRequestParamsValidator,
    OptionValidator, QueryError, Validator, build_query,
};

// Re-export the provider
#[cfg(feature = "fetch")]
pub use exr_fetch::{
    BASE_URL, BankOfItaly, Body, ClientConfig, Endpoint, ExrError, HttpTransport, Payload,
    ResponseMode, Transport,
};

// Re-export JSON persistence
#[cfg(feature = "format")]
pub use exr_format::{FormatError, JsonFormatter, from_json_file, to_json_file};

/// Prelude module for convenient imports.
///
/// ```
/// use exr_lib::prelude::*;
/// ```
pub mod prelude {
    pub use exr_types::{
        Currencies, DailyRates, Lang, LatestRates, MediaType, Options, QuoteCurrency,
        ValidationError,
    };

    pub use exr_currencies::CurrencyRegistry;

    pub use exr_params::{DailyRatesRequestParamsValidator, Validator};

    #[cfg(feature = "fetch")]
    pub use exr_fetch::{BankOfItaly, Endpoint, ExrError, Payload};

    #[cfg(feature = "format")]
    pub use exr_format::{from_json_file, to_json_file};
}
