//! Bank of Italy provider facade.

use exr_currencies::CurrencyRegistry;
use exr_params::{
    BaseRequestParamsValidator, DailyRatesRequestParamsValidator, OptionValidator, Validator,
    build_query,
};
use exr_types::{
    BaseRequestParams, Currencies, DailyRates, DailyRatesRequestParams, Lang, LatestRates,
    MediaType, Options,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::respond::{self, Payload, ResponseMode};
use crate::url::{BASE_URL, Endpoint, path_and_query};
use crate::{ClientConfig, ExrError, HttpTransport, Transport};

/// Provider name.
pub const NAME: &str = "BankOfItaly";

/// Client of the Bank of Italy exchange-rate service.
///
/// Every request validates its parameters before touching the network.
/// Parameters missing `lang` or `output` inherit them from the provider
/// [`Options`].
#[derive(Debug, Clone)]
pub struct BankOfItaly<T: Transport = HttpTransport> {
    options: Options,
    transport: T,
    currencies: &'static CurrencyRegistry,
}

impl BankOfItaly<HttpTransport> {
    /// Creates a provider sending requests over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(options: Options) -> Result<Self, ExrError> {
        let transport = HttpTransport::new(ClientConfig::for_options(&options))?;
        Ok(Self::with_transport(options, transport))
    }

    /// Creates a provider with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ExrError> {
        Self::new(Options::default())
    }

    /// Creates a provider from untyped options.
    ///
    /// # Errors
    ///
    /// Returns [`ExrError::InvalidOption`] if the options are rejected.
    pub fn with_options(raw: &Value) -> Result<Self, ExrError> {
        let options = OptionValidator
            .validate(raw)
            .map_err(ExrError::InvalidOption)?;
        Self::new(options)
    }
}

impl<T: Transport> BankOfItaly<T> {
    /// Creates a provider on top of an existing transport.
    pub fn with_transport(options: Options, transport: T) -> Self {
        Self {
            options,
            transport,
            currencies: CurrencyRegistry::global(),
        }
    }

    /// Returns the provider name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        NAME
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn base_endpoint(&self) -> &'static str {
        BASE_URL
    }

    /// Returns the provider options.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the rates of every currency on the latest quoted day.
    ///
    /// `params` may hold `lang`, `output` and `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExrError::InvalidParams`] if the parameters are rejected, or
    /// any transport or response error.
    pub async fn latest_rates(
        &self,
        params: Option<&Value>,
    ) -> Result<Payload<LatestRates>, ExrError> {
        let params = BaseRequestParamsValidator
            .validate(&self.seed(params))
            .map_err(ExrError::InvalidParams)?;
        self.latest_rates_validated(&params).await
    }

    /// Same as [`Self::latest_rates`] for parameters that are already validated.
    ///
    /// # Errors
    ///
    /// Returns any transport or response error.
    pub async fn latest_rates_validated(
        &self,
        params: &BaseRequestParams,
    ) -> Result<Payload<LatestRates>, ExrError> {
        let query = build_query(params, self.options.lang())?;
        self.fetch(
            Endpoint::LatestRates,
            &query,
            params.output().mime(),
            params.path(),
        )
        .await
    }

    /// Fetches the rates of the requested currencies on a given day.
    ///
    /// `params` must hold `referenceDate`, `baseCurrencyIsoCodes` and
    /// `currencyIsoCode`, and may hold `lang`, `output` and `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExrError::InvalidParams`] if the parameters are rejected, or
    /// any transport or response error.
    pub async fn daily_rates(&self, params: &Value) -> Result<Payload<DailyRates>, ExrError> {
        let params = DailyRatesRequestParamsValidator::new(self.currencies)
            .validate(&self.seed(Some(params)))
            .map_err(ExrError::InvalidParams)?;
        self.daily_rates_validated(&params).await
    }

    /// Same as [`Self::daily_rates`] for parameters that are already validated.
    ///
    /// # Errors
    ///
    /// Returns any transport or response error.
    pub async fn daily_rates_validated(
        &self,
        params: &DailyRatesRequestParams,
    ) -> Result<Payload<DailyRates>, ExrError> {
        let query = build_query(params, self.options.lang())?;
        self.fetch(
            Endpoint::DailyRates,
            &query,
            params.base().output().mime(),
            params.base().path(),
        )
        .await
    }

    /// Fetches every currency known to the service, including expired ones.
    ///
    /// Always requests JSON, whatever the provider output.
    ///
    /// # Errors
    ///
    /// Returns any transport or response error.
    pub async fn currencies(&self, lang: Option<Lang>) -> Result<Currencies, ExrError> {
        let lang = lang.unwrap_or(self.options.lang());
        let query = build_query(&Map::new(), lang)?;
        let path = path_and_query(Endpoint::Currencies, &query);

        debug!(endpoint = %Endpoint::Currencies, %lang, "requesting currencies");
        let body = self.transport.get(&path, MediaType::Json.mime()).await?;
        respond::read_json(body).await
    }

    /// Returns the ISO code and name of every currency still in use.
    ///
    /// # Errors
    ///
    /// Returns any transport or response error.
    pub async fn simplified_currencies(
        &self,
        lang: Option<Lang>,
    ) -> Result<BTreeMap<String, String>, ExrError> {
        Ok(self.currencies(lang).await?.simplified())
    }

    /// Returns the ISO codes of the reference table starting with `prefix`
    /// (case-insensitive).
    #[must_use]
    pub fn filter_currencies(&self, prefix: &str) -> Vec<&'static str> {
        self.currencies.filter(prefix)
    }

    /// Sends a request and handles the response according to `accept`.
    ///
    /// Format and destination are checked before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ExrError::UnsupportedFormat`] for an unknown `accept`,
    /// [`ExrError::MissingOutputPath`] for a binary `accept` without `path`,
    /// or any transport or response error.
    pub async fn fetch<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &str,
        accept: &str,
        path: Option<&Path>,
    ) -> Result<Payload<R>, ExrError> {
        let mode = ResponseMode::for_accept(accept)?;
        if mode == ResponseMode::Stream && path.is_none() {
            return Err(ExrError::MissingOutputPath);
        }

        debug!(%endpoint, accept, query, "sending request");
        let body = self
            .transport
            .get(&path_and_query(endpoint, query), accept)
            .await?;
        respond::handle(body, mode, path).await
    }

    /// Fills `lang` and `output` from the provider options when absent.
    fn seed(&self, params: Option<&Value>) -> Value {
        let mut raw = params.cloned().unwrap_or_else(|| Value::Object(Map::new()));
        if let Value::Object(fields) = &mut raw {
            for (key, default) in [
                ("lang", self.options.lang().as_str()),
                ("output", self.options.output().mime()),
            ] {
                if fields.get(key).is_none_or(Value::is_null) {
                    fields.insert(key.to_string(), Value::from(default));
                }
            }
        }
        raw
    }
}

impl<T: Transport> std::fmt::Display for BankOfItaly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(NAME)
    }
}
