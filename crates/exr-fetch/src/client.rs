//! HTTP transport for the exchange-rate service.

use async_trait::async_trait;
use bytes::Bytes;
use exr_types::Options;
use futures::stream::{Stream, TryStreamExt};
use reqwest::Client;
use reqwest::header::ACCEPT;
use std::pin::Pin;
use std::time::Duration;

use crate::ExrError;
use crate::url::{BASE_URL, join};

/// Response body, delivered chunk by chunk.
pub type Body = Pin<Box<dyn Stream<Item = Result<Bytes, ExrError>> + Send>>;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration using the timeout of `options`.
    #[must_use]
    pub fn for_options(options: &Options) -> Self {
        Self {
            timeout: options.request_timeout(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Options::default().request_timeout(),
            user_agent: format!("exr/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Sends GET requests and hands back the response body.
///
/// Implementations map non-success statuses to [`ExrError::Status`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Requests `path_and_query`, relative to the service base URL, with the
    /// given `Accept` header.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    async fn get(&self, path_and_query: &str, accept: &str) -> Result<Body, ExrError>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Creates a new transport with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            // Covers the whole exchange, body included
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a transport with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path_and_query: &str, accept: &str) -> Result<Body, ExrError> {
        let url = join(&self.config.base_url, path_and_query);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, accept)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExrError::Status {
                status: status.as_u16(),
            });
        }

        Ok(Box::pin(response.bytes_stream().map_err(ExrError::from)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exr_types::{Lang, MediaType};
    use std::num::NonZeroU64;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout, Duration::from_millis(3000));
        assert!(config.user_agent.starts_with("exr/"));
    }

    #[test]
    fn test_config_follows_options() {
        let options = Options::new(Lang::It, MediaType::Json, NonZeroU64::new(750).unwrap());
        let config = ClientConfig::for_options(&options);
        assert_eq!(config.timeout, Duration::from_millis(750));
    }

    #[tokio::test]
    async fn test_transport_creation() {
        let transport = HttpTransport::with_defaults();
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            // Hold the connection open without ever answering
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let transport = HttpTransport::new(ClientConfig {
            base_url: format!("http://{addr}"),
            timeout: Duration::from_millis(100),
            ..ClientConfig::default()
        })
        .unwrap();

        let started = std::time::Instant::now();
        let Err(err) = transport.get("/latestRates?lang=en", "application/json").await else {
            panic!("a silent server must not produce a body");
        };
        assert!(err.is_timeout(), "unexpected error: {err}");
        assert!(!err.is_validation());
        assert!(started.elapsed() < Duration::from_secs(2));

        server.abort();
    }
}
