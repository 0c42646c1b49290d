//! Currency reference table for the exr exchange-rate client.
//!
//! This crate provides read-only access to the ISO 4217 currencies in
//! circulation, keyed by their alphabetic code.
//!
//! # Example
//!
//! ```
//! use exr_currencies::CurrencyRegistry;
//!
//! let registry = CurrencyRegistry::global();
//!
//! // Lookup by ISO code
//! if let Some(currency) = registry.get("eur") {
//!     println!("{}: {}", currency.iso_code(), currency.name());
//! }
//!
//! // Prefix filter
//! assert_eq!(registry.filter("E"), ["EGP", "ERN", "ETB", "EUR"]);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/exr-rs/exr/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::OnceLock;

use exr_types::CurrencyInfo;

/// The currency metadata JSON embedded at compile time.
const CURRENCIES_JSON: &str = include_str!("../data/currencies.json");

/// Global currency registry instance.
static REGISTRY: OnceLock<CurrencyRegistry> = OnceLock::new();

/// Registry of the ISO 4217 currencies in circulation.
#[derive(Debug)]
pub struct CurrencyRegistry {
    currencies: HashMap<String, CurrencyInfo>,
}

impl CurrencyRegistry {
    /// Returns the global currency registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads currencies from the embedded JSON data.
    fn load() -> Self {
        let currencies: HashMap<String, CurrencyInfo> =
            serde_json::from_str(CURRENCIES_JSON).expect("Invalid currencies.json");
        Self { currencies }
    }

    /// Builds a registry from explicit entries, keyed by their ISO code.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = CurrencyInfo>) -> Self {
        let currencies = entries
            .into_iter()
            .map(|c| (c.iso_code().to_uppercase(), c))
            .collect();
        Self { currencies }
    }

    /// Looks up a currency by ISO code (case-insensitive).
    #[must_use]
    pub fn get(&self, iso_code: &str) -> Option<&CurrencyInfo> {
        self.currencies.get(&iso_code.to_uppercase())
    }

    /// Returns true if the ISO code is in the table (case-insensitive).
    #[must_use]
    pub fn contains(&self, iso_code: &str) -> bool {
        self.get(iso_code).is_some()
    }

    /// Returns all currencies as an iterator.
    pub fn all(&self) -> impl Iterator<Item = &CurrencyInfo> {
        self.currencies.values()
    }

    /// Returns the total number of currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Returns the ISO codes starting with `prefix` (case-insensitive),
    /// sorted alphabetically.
    pub fn filter(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.to_uppercase();
        let mut codes: Vec<&str> = self
            .currencies
            .keys()
            .map(String::as_str)
            .filter(|code| code.starts_with(&prefix))
            .collect();
        codes.sort_unstable();
        codes
    }

    /// Searches currencies by ISO code or name (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&CurrencyInfo> {
        let pattern = pattern.to_lowercase();
        let mut found: Vec<&CurrencyInfo> = self
            .currencies
            .values()
            .filter(|c| {
                c.iso_code().to_lowercase().contains(&pattern)
                    || c.name().to_lowercase().contains(&pattern)
            })
            .collect();
        found.sort_unstable_by(|a, b| a.iso_code().cmp(b.iso_code()));
        found
    }

    /// Returns all ISO codes sorted alphabetically.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.currencies.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

/// Returns the ISO codes of the global table starting with `prefix`
/// (case-insensitive).
pub fn filter_currencies(prefix: &str) -> Vec<&'static str> {
    CurrencyRegistry::global().filter(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_loads() {
        let registry = CurrencyRegistry::global();
        assert!(!registry.is_empty());
        assert!(registry.len() > 150);
    }

    #[test]
    fn test_keys_match_entries() {
        let registry = CurrencyRegistry::global();
        for code in registry.codes() {
            assert_eq!(registry.get(code).unwrap().iso_code(), code);
        }
    }

    #[test]
    fn test_get_eur() {
        let registry = CurrencyRegistry::global();
        let eur = registry.get("EUR").expect("EUR should exist");
        assert_eq!(eur.name(), "Euro");
        assert_eq!(eur.numeric_code(), "978");
        assert_eq!(eur.minor_unit(), 2);
    }

    #[test]
    fn test_get_case_insensitive() {
        let registry = CurrencyRegistry::global();
        assert!(registry.get("usd").is_some());
        assert!(registry.get("Usd").is_some());
        assert!(registry.contains("CHF"));
        assert!(!registry.contains("ITL"));
    }

    #[test]
    fn test_filter_e() {
        let found: HashSet<&str> = filter_currencies("E").into_iter().collect();
        let expected: HashSet<&str> = ["EGP", "ERN", "ETB", "EUR"].into_iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_filter_lowercase_prefix() {
        assert_eq!(filter_currencies("eu"), ["EUR"]);
        assert!(filter_currencies("QQ").is_empty());
    }

    #[test]
    fn test_search_by_name() {
        let registry = CurrencyRegistry::global();
        let results = registry.search("franc");
        assert!(results.iter().any(|c| c.iso_code() == "CHF"));
    }

    #[test]
    fn test_from_entries() {
        let registry =
            CurrencyRegistry::from_entries([CurrencyInfo::new("eur", "Euro", "978", 2)]);
        assert!(registry.contains("EUR"));
        assert_eq!(registry.len(), 1);
    }
}
