//! Bank of Italy URL construction.

/// Base URL of the exchange-rate service.
pub const BASE_URL: &str = "https://tassidicambio.bancaditalia.it/terzevalute-wf-web/rest/v1.0";

/// Service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Rates on the latest day with quotations for every currency.
    LatestRates,
    /// Rates of selected currencies on a given day.
    DailyRates,
    /// Every currency known to the service, including expired ones.
    Currencies,
}

impl Endpoint {
    /// Returns the path segment, with its leading slash.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::LatestRates => "/latestRates",
            Self::DailyRates => "/dailyRates",
            Self::Currencies => "/currencies",
        }
    }

    /// Returns the operation name without the slash, e.g. `latestRates`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LatestRates => "latestRates",
            Self::DailyRates => "dailyRates",
            Self::Currencies => "currencies",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Joins an endpoint and a query into a path relative to the base URL.
///
/// # Example
///
/// ```
/// use exr_fetch::url::{Endpoint, path_and_query};
///
/// assert_eq!(
///     path_and_query(Endpoint::Currencies, "lang=it"),
///     "/currencies?lang=it"
/// );
/// assert_eq!(path_and_query(Endpoint::LatestRates, ""), "/latestRates");
/// ```
#[must_use]
pub fn path_and_query(endpoint: Endpoint, query: &str) -> String {
    if query.is_empty() {
        endpoint.path().to_string()
    } else {
        format!("{}?{query}", endpoint.path())
    }
}

/// Joins a base URL and a relative path, tolerating a trailing slash on the base.
#[must_use]
pub fn join(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}
