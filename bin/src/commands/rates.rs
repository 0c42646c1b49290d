//! Rates commands.
//!
//! Fetches latest and daily rates, printing JSON results as tables or
//! saving them, and streaming the other formats to disk.

use crate::display::{Format, output_path, print_daily, print_latest, report_saved, spinner};
use anyhow::{Context, Result, bail};
use exr_lib::prelude::*;
use inquire::MultiSelect;
use serde_json::{Map, Value, json};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Fetch the rates of every currency on the latest quoted day.
pub(crate) async fn latest(
    lang: Option<&str>,
    format: Format,
    output: Option<PathBuf>,
    timeout_ms: u64,
    quiet: bool,
) -> Result<()> {
    let bank = super::connect(lang, timeout_ms)?;
    let path = output_path(Endpoint::LatestRates, format, output);
    let params = Value::Object(base_params(format, path.as_ref()));

    let progress = spinner(quiet, "Fetching latest rates".to_string());
    let result = bank.latest_rates(Some(&params)).await;
    progress.finish_and_clear();

    match result.context("Failed to fetch latest rates")? {
        Payload::Json(rates) => match path {
            Some(path) => {
                to_json_file(&path, &rates, true)?;
                report_saved(&path, None, quiet);
            }
            None => print_latest(&rates),
        },
        Payload::Saved { path, bytes } => report_saved(&path, Some(bytes), quiet),
    }
    Ok(())
}

/// Fetch the rates of the given currencies on a reference date.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn daily(
    date: &str,
    base: Vec<String>,
    quote: &str,
    lang: Option<&str>,
    format: Format,
    output: Option<PathBuf>,
    timeout_ms: u64,
    quiet: bool,
) -> Result<()> {
    let base = if base.is_empty() {
        select_currencies()?
    } else {
        base
    };

    let bank = super::connect(lang, timeout_ms)?;
    let path = output_path(Endpoint::DailyRates, format, output);

    let mut params = base_params(format, path.as_ref());
    params.insert("referenceDate".to_string(), json!(date));
    params.insert("baseCurrencyIsoCodes".to_string(), json!(base));
    params.insert("currencyIsoCode".to_string(), json!(quote));

    let progress = spinner(quiet, format!("Fetching rates for {date}"));
    let result = bank.daily_rates(&Value::Object(params)).await;
    progress.finish_and_clear();

    match result.context("Failed to fetch daily rates")? {
        Payload::Json(rates) => match path {
            Some(path) => {
                to_json_file(&path, &rates, true)?;
                report_saved(&path, None, quiet);
            }
            None => print_daily(&rates, &quote.to_uppercase()),
        },
        Payload::Saved { path, bytes } => report_saved(&path, Some(bytes), quiet),
    }
    Ok(())
}

fn base_params(format: Format, path: Option<&PathBuf>) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("output".to_string(), json!(format.media_type().mime()));
    if let Some(path) = path {
        params.insert(
            "path".to_string(),
            json!(path.to_string_lossy().into_owned()),
        );
    }
    params
}

/// Prompts for base currencies from the reference table.
fn select_currencies() -> Result<Vec<String>> {
    if !std::io::stdin().is_terminal() {
        bail!("At least one --base currency is required");
    }

    let registry = CurrencyRegistry::global();
    let options: Vec<String> = registry
        .codes()
        .into_iter()
        .filter_map(|code| registry.get(code))
        .map(|c| format!("{} | {}", c.iso_code(), c.name()))
        .collect();

    let selection = MultiSelect::new("Select base currencies:", options)
        .with_page_size(15)
        .prompt()
        .context("Currency selection cancelled")?;

    let codes: Vec<String> = selection
        .iter()
        .filter_map(|line| line.split(" | ").next())
        .map(str::to_string)
        .collect();

    if codes.is_empty() {
        bail!("No base currency selected");
    }
    Ok(codes)
}
