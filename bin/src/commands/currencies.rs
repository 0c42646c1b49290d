//! Currency commands.
//!
//! Lists the currencies known to the service and queries the embedded
//! reference table.

use crate::display::{
    print_currencies, print_currency_info, print_simplified, report_saved, spinner,
};
use anyhow::{Context, Result};
use exr_lib::filter_currencies;
use exr_lib::prelude::*;
use std::path::PathBuf;

/// Fetch the currencies known to the service.
pub(crate) async fn currencies(
    lang: Option<&str>,
    simplified: bool,
    output: Option<PathBuf>,
    pretty: bool,
    timeout_ms: u64,
    quiet: bool,
) -> Result<()> {
    let bank = super::connect(lang, timeout_ms)?;
    let progress = spinner(quiet, "Fetching currencies".to_string());

    if simplified {
        let result = bank.simplified_currencies(None).await;
        progress.finish_and_clear();
        let names = result.context("Failed to fetch currencies")?;

        match output {
            Some(path) => {
                to_json_file(&path, &names, pretty)?;
                report_saved(&path, None, quiet);
            }
            None => print_simplified(&names),
        }
    } else {
        let result = bank.currencies(None).await;
        progress.finish_and_clear();
        let list = result.context("Failed to fetch currencies")?;

        match output {
            Some(path) => {
                to_json_file(&path, &list, pretty)?;
                report_saved(&path, None, quiet);
            }
            None => print_currencies(&list),
        }
    }
    Ok(())
}

/// List ISO codes of the reference table starting with `prefix`.
pub(crate) fn filter(prefix: &str) -> Result<()> {
    let registry = CurrencyRegistry::global();
    let codes = filter_currencies(prefix);

    if codes.is_empty() {
        println!("No currencies found.");
        return Ok(());
    }

    for code in &codes {
        let name = registry.get(code).map_or("", |c| c.name());
        println!("{code:<5} {name}");
    }

    println!("\nTotal: {} currencies", codes.len());
    Ok(())
}

/// Show a currency of the reference table.
pub(crate) fn info(code: &str) -> Result<()> {
    let info = CurrencyRegistry::global()
        .get(code)
        .with_context(|| format!("Unknown currency: {code}"))?;
    print_currency_info(info);
    Ok(())
}
