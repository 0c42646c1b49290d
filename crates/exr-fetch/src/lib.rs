//! Bank of Italy exchange-rate provider.
//!
//! This crate provides the request pipeline:
//!
//! - [`BankOfItaly`] - Provider facade validating parameters and dispatching requests
//! - [`Transport`] - Seam between the facade and the network
//! - [`HttpTransport`] - `reqwest` transport with the configured timeout
//! - [`respond`] - JSON parsing or streamed file output of response bodies
//! - [`url`] - Service endpoints
//!
//! # Example
//!
//! ```no_run
//! use exr_fetch::BankOfItaly;
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), exr_fetch::ExrError> {
//! let bank = BankOfItaly::with_options(&json!({"lang": "it"}))?;
//!
//! let latest = bank.latest_rates(None).await?;
//! let daily = bank
//!     .daily_rates(&json!({
//!         "referenceDate": "2020-10-22",
//!         "baseCurrencyIsoCodes": ["USD", "GBP"],
//!         "currencyIsoCode": "EUR",
//!     }))
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/exr-rs/exr/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod provider;
pub mod respond;
pub mod url;

pub use client::{Body, ClientConfig, HttpTransport, Transport};
pub use error::ExrError;
pub use provider::{BankOfItaly, NAME};
pub use respond::{Payload, ResponseMode};
pub use url::{BASE_URL, Endpoint};
