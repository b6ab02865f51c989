//! Client and explorer configuration

use std::fmt;
use std::time::Duration;

use reqwest::Client;

use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_EXPLORER_BASE_URL, DEFAULT_POOL_IDLE_TIMEOUT,
    DEFAULT_POOL_MAX_IDLE_PER_HOST, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ENV_EXPLORER_API_KEY,
    ENV_EXPLORER_BASE_URL,
};
use crate::error::{FetchError, Result};

/// Settings for the pooled HTTP client
///
/// The defaults keep connections alive between calls so repeated queries
/// against the same explorer host reuse sockets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Total time allowed for one request, body included
    pub timeout:                Duration,
    /// Time allowed to establish the TCP/TLS connection
    pub connect_timeout:        Duration,
    /// How long an idle pooled connection is kept
    pub pool_idle_timeout:      Duration,
    /// Upper bound on idle pooled connections per host
    pub pool_max_idle_per_host: usize,
    /// `User-Agent` header sent with every request
    pub user_agent:             String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout:                DEFAULT_TIMEOUT,
            connect_timeout:        DEFAULT_CONNECT_TIMEOUT,
            pool_idle_timeout:      DEFAULT_POOL_IDLE_TIMEOUT,
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            user_agent:             DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Override the total request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a `reqwest::Client` from these settings
    ///
    /// # Errors
    /// [`FetchError::Configuration`] if the TLS backend or resolver cannot be
    /// initialized.
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .pool_idle_timeout(self.pool_idle_timeout)
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Configuration(format!("Failed to build HTTP client: {e}")))
    }
}

/// Where the explorer lives and how to authenticate against it
#[derive(Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    base_url: String,
    api_key:  String,
}

impl ExplorerConfig {
    /// Create a configuration for the given API endpoint and key
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key:  api_key.into(),
        }
    }

    /// Read configuration from `EXPLORER_BASE_URL` and `EXPLORER_API_KEY`
    ///
    /// The base URL falls back to the public Snowtrace endpoint. The API key
    /// is required.
    ///
    /// # Errors
    /// [`FetchError::Configuration`] if `EXPLORER_API_KEY` is unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(ENV_EXPLORER_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                FetchError::Configuration(format!("{ENV_EXPLORER_API_KEY} is not set"))
            })?;
        let base_url = lookup(ENV_EXPLORER_BASE_URL)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EXPLORER_BASE_URL.to_string());

        Ok(Self::new(base_url, api_key))
    }

    /// Replace the base URL, keeping the API key
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Base URL of the explorer API
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API key sent as the `apikey` query parameter
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Keeps the key out of logs
impl fmt::Debug for ExplorerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplorerConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
