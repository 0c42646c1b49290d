//! CLI command implementations.

pub(crate) mod currencies;
pub(crate) mod rates;

use anyhow::{Context, Result};
use exr_lib::prelude::*;
use serde_json::{Value, json};
use tracing::debug;

/// Builds the provider from the command-line options.
///
/// Options go through the same validation as library callers.
pub(crate) fn connect(lang: Option<&str>, timeout_ms: u64) -> Result<BankOfItaly> {
    let mut options = json!({ "requestTimeoutMs": timeout_ms });
    if let Some(lang) = lang {
        options["lang"] = Value::from(lang);
    }
    debug!(?lang, timeout_ms, "creating client");
    BankOfItaly::with_options(&options).context("Failed to create the Bank of Italy client")
}
