//! Request parameter validation and query construction.
//!
//! This crate provides the input side of the request pipeline:
//!
//! - [`OptionValidator`] - Validates provider options
//! - [`BaseRequestParamsValidator`] - Validates parameters shared by every rates request
//! - [`DailyRatesRequestParamsValidator`] - Validates daily-rates parameters
//! - [`build_query`] - Turns validated parameters into a URL query string
//!
//! # Example
//!
//! ```
//! use exr_params::{DailyRatesRequestParamsValidator, Validator, build_query};
//! use exr_types::Lang;
//! use serde_json::json;
//!
//! let params = DailyRatesRequestParamsValidator::global()
//!     .validate(&json!({
//!         "referenceDate": "2020-10-22",
//!         "baseCurrencyIsoCodes": "USD",
//!         "currencyIsoCode": "EUR",
//!     }))
//!     .unwrap();
//!
//! let query = build_query(&params, Lang::En).unwrap();
//! assert_eq!(
//!     query,
//!     "lang=en&referenceDate=2020-10-22&baseCurrencyIsoCodes=USD&currencyIsoCode=EUR"
//! );
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/exr-rs/exr/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod query;
mod rules;
mod validate;

pub use query::{CLIENT_ONLY_FIELDS, QueryError, build_query};
pub use validate::{
    BaseRequestParamsValidator, DailyRatesRequestParamsValidator, OptionValidator, Validator,
};
