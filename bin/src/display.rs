//! Display utilities and output formatting for the exr CLI.

use clap::ValueEnum;
use exr_lib::prelude::*;
use exr_lib::CurrencyInfo;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Response format requested from the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Json,
    Csv,
    Pdf,
    Xls,
}

impl Format {
    pub(crate) const fn media_type(self) -> MediaType {
        match self {
            Self::Json => MediaType::Json,
            Self::Csv => MediaType::Csv,
            Self::Pdf => MediaType::Pdf,
            Self::Xls => MediaType::Xls,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.media_type().extension())
    }
}

/// Destination of a response: the given path, or `<endpoint>.<format>` for
/// formats that cannot be printed.
pub(crate) fn output_path(
    endpoint: Endpoint,
    format: Format,
    output: Option<PathBuf>,
) -> Option<PathBuf> {
    output.or_else(|| {
        format
            .media_type()
            .is_binary()
            .then(|| PathBuf::from(format!("{}.{}", endpoint.name(), format)))
    })
}

/// Spinner shown while a request is in flight.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub(crate) fn report_saved(path: &Path, bytes: Option<u64>, quiet: bool) {
    if quiet {
        return;
    }
    match bytes {
        Some(bytes) => println!("Output written to: {} ({bytes} bytes)", path.display()),
        None => println!("Output written to: {}", path.display()),
    }
}

pub(crate) fn print_latest(rates: &LatestRates) {
    println!(
        "{:<5} {:<30} {:>14} {:>14} {:<10}",
        "ISO", "CURRENCY", "EUR RATE", "USD RATE", "DATE"
    );
    println!("{}", "-".repeat(77));

    for rate in &rates.latest_rates {
        println!(
            "{:<5} {:<30} {:>14.4} {:>14.4} {:<10}",
            rate.iso_code,
            truncate(&rate.currency, 30),
            rate.eur_rate,
            rate.usd_rate,
            rate.reference_date
        );
    }

    println!("\nTotal: {} rates", rates.len());
    println!("{}", rates.results_info.timezone_reference);
}

pub(crate) fn print_daily(rates: &DailyRates, quote: &str) {
    println!(
        "{:<5} {:<30} {:>14} {:<10}",
        "ISO",
        "CURRENCY",
        format!("AVG ({quote})"),
        "DATE"
    );
    println!("{}", "-".repeat(62));

    for rate in &rates.rates {
        println!(
            "{:<5} {:<30} {:>14.4} {:<10}",
            rate.iso_code,
            truncate(&rate.currency, 30),
            rate.avg_rate,
            rate.reference_date
        );
    }

    if let Some(notice) = &rates.results_info.notice {
        println!("\n{notice}");
    }
}

pub(crate) fn print_currencies(list: &Currencies) {
    println!("{:<5} {:<36} {:<8} {:>9}", "ISO", "NAME", "ACTIVE", "COUNTRIES");
    println!("{}", "-".repeat(61));

    for currency in &list.currencies {
        println!(
            "{:<5} {:<36} {:<8} {:>9}",
            currency.iso_code,
            truncate(&currency.name, 36),
            if currency.is_active() { "yes" } else { "no" },
            currency.countries.len()
        );
    }

    let active = list.currencies.iter().filter(|c| c.is_active()).count();
    println!(
        "\nTotal: {} currencies ({active} active)",
        list.currencies.len()
    );
}

pub(crate) fn print_simplified(names: &BTreeMap<String, String>) {
    for (code, name) in names {
        println!("{code:<5} {name}");
    }
    println!("\nTotal: {} currencies", names.len());
}

pub(crate) fn print_currency_info(info: &CurrencyInfo) {
    println!("Currency:     {}", info.name());
    println!("ISO code:     {}", info.iso_code());
    println!("Numeric code: {}", info.numeric_code());
    println!("Minor unit:   {}", info.minor_unit());
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}
