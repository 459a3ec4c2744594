use crate::client::Client;
use crate::transport::HttpTransport;
use crate::{Error, Result};
use std::env;
use std::sync::Arc;
use std::time::Duration;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Whole-request timeout of the default HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";
const BASE_URL_ENV: &str = "ELEVENLABS_BASE_URL";
const TIMEOUT_ENV: &str = "ELEVENLABS_HTTP_TIMEOUT_SECS";

/// Builder for [`Client`].
///
/// Every option is independent: set any subset in any order, the rest fall back to the
/// environment and then to defaults.
///
/// - API key: `api_key()` or `ELEVENLABS_API_KEY`, required
/// - base URL: `base_url()` or `ELEVENLABS_BASE_URL`, default [`DEFAULT_BASE_URL`]
/// - timeout: `timeout()` or `ELEVENLABS_HTTP_TIMEOUT_SECS`, default [`DEFAULT_TIMEOUT`]
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API endpoint, e.g. to point at a mock server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured connector. Its own timeout applies; `timeout()` is ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<Client> {
        self.build_with_env(|key| env::var(key).ok())
    }

    fn build_with_env(self, lookup: impl Fn(&str) -> Option<String>) -> Result<Client> {
        let api_key = self
            .api_key
            .or_else(|| lookup(API_KEY_ENV))
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::configuration(format!("API key required ({})", API_KEY_ENV)))?;

        let base_url = self
            .base_url
            .or_else(|| lookup(BASE_URL_ENV))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let timeout = self
                    .timeout
                    .or_else(|| {
                        lookup(TIMEOUT_ENV)
                            .and_then(|s| s.parse::<u64>().ok())
                            .map(Duration::from_secs)
                    })
                    .unwrap_or(DEFAULT_TIMEOUT);
                reqwest::Client::builder()
                    .timeout(timeout)
                    .build()
                    .map_err(|e| {
                        Error::configuration(format!("Failed to create HTTP client: {}", e))
                    })?
            }
        };

        tracing::debug!(base_url = %base_url, "elevenlabs client configured");

        let transport = HttpTransport::new(http_client, base_url.clone(), api_key);
        Ok(Client::with_transport(Arc::new(transport), base_url))
    }
}
