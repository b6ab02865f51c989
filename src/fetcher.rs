//! Raw GET requests with query parameters
//!
//! [`QueryFetcher`] builds a GET request for an endpoint, appends the query
//! parameters, dispatches it through a [`SharedClient`] and hands back the
//! body bytes untouched. Status codes are not inspected; interpreting the
//! payload is the caller's job.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::error::{FetchError, Result};
use crate::http_client::SharedClient;
use crate::query::{QueryParameters, build_url};

/// Performs GET requests through a shared, pooled client
#[derive(Debug, Clone)]
pub struct QueryFetcher {
    client: SharedClient,
}

impl QueryFetcher {
    /// Create a fetcher that dispatches through `client`
    #[must_use]
    pub const fn new(client: SharedClient) -> Self {
        Self { client }
    }

    /// The client handle requests go through
    #[must_use]
    pub const fn shared_client(&self) -> &SharedClient {
        &self.client
    }

    /// GET `endpoint` with `params` appended and return the raw body
    ///
    /// # Errors
    /// - [`FetchError::RequestConstruction`] if the endpoint is malformed; nothing is sent
    /// - [`FetchError::Transport`] if the request cannot be dispatched
    /// - [`FetchError::Read`] if the body cannot be read to completion
    /// - [`FetchError::Configuration`] if the shared client cannot be built on first use
    ///
    /// Underlying `reqwest` errors are stored without their URL, so query
    /// values such as the API key never appear in error text.
    pub async fn fetch_raw(&self, endpoint: &str, params: &QueryParameters) -> Result<Vec<u8>> {
        self.fetch(endpoint, params, None).await
    }

    /// Same as [`fetch_raw`](Self::fetch_raw) with a per-call timeout
    ///
    /// The timeout replaces the client-wide default for this request only and
    /// covers both dispatch and body read.
    ///
    /// # Errors
    /// Same as [`fetch_raw`](Self::fetch_raw); a timeout before the response
    /// head is [`FetchError::Transport`], one during the body is [`FetchError::Read`].
    pub async fn fetch_raw_with_timeout(
        &self,
        endpoint: &str,
        params: &QueryParameters,
        timeout: Duration,
    ) -> Result<Vec<u8>> {
        self.fetch(endpoint, params, Some(timeout)).await
    }

    /// Fetch and decode the body as JSON into `T`
    ///
    /// # Errors
    /// Anything [`fetch_raw`](Self::fetch_raw) returns, or
    /// [`FetchError::Decode`] if the body is not valid JSON for `T`.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParameters,
    ) -> Result<T> {
        let body = self.fetch_raw(endpoint, params).await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    async fn fetch(
        &self,
        endpoint: &str,
        params: &QueryParameters,
        timeout: Option<Duration>,
    ) -> Result<Vec<u8>> {
        // Validate before touching the client so a bad endpoint never dispatches
        let url = build_url(endpoint, params)?;
        let client = self.client.client()?;

        let host = url.host_str().unwrap_or_default().to_string();
        let path = url.path().to_string();

        let mut builder = client.get(url);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let request = builder
            .build()
            .map_err(|e| FetchError::request_construction(endpoint, e.without_url().to_string()))?;

        // Parameter values may carry the API key, so only the count is logged
        debug!(%host, %path, parameters = params.len(), "Dispatching GET request");

        // reqwest errors render the full URL, query string included
        let response = client.execute(request).await.map_err(|source| {
            let source = source.without_url();
            warn!(%host, %path, error = %source, "GET request failed");
            FetchError::Transport {
                endpoint: endpoint.to_string(),
                source,
            }
        })?;

        let status = response.status();
        // The response is consumed here; its connection goes back to the pool
        // or is dropped whether or not the read succeeds
        let body = response.bytes().await.map_err(|source| {
            let source = source.without_url();
            warn!(%host, %path, %status, error = %source, "Failed to read response body");
            FetchError::Read {
                endpoint: endpoint.to_string(),
                source,
            }
        })?;

        trace!(%host, %path, %status, bytes = body.len(), "Received response body");
        Ok(body.to_vec())
    }
}

impl Default for QueryFetcher {
    /// Fetcher backed by the process-wide [`SharedClient::global`] handle
    fn default() -> Self {
        Self::new(SharedClient::global().clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::config::ClientConfig;

    fn counting_fetcher() -> (QueryFetcher, Arc<AtomicUsize>) {
        let counter = Arc::new(AtomicUsize::new(0));
        let builds = Arc::clone(&counter);
        let client = SharedClient::with_factory(move || {
            builds.fetch_add(1, Ordering::SeqCst);
            ClientConfig::default().build_client()
        });
        (QueryFetcher::new(client), counter)
    }

    #[tokio::test]
    async fn test_malformed_endpoint_never_builds_client() {
        let (fetcher, counter) = counting_fetcher();

        for endpoint in ["", "::not-a-url::"] {
            let error = fetcher
                .fetch_raw(endpoint, &QueryParameters::from([("action", "list")]))
                .await
                .unwrap_err();
            assert!(error.is_request_construction());
        }

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(!fetcher.shared_client().is_initialized());
    }

    #[tokio::test]
    async fn test_transport_error_omits_query_values() {
        // Grab a free port, then close it so the connection is refused
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let params = QueryParameters::from([("apikey", "SUPERSECRET"), ("module", "account")]);
        let error = QueryFetcher::new(SharedClient::default())
            .fetch_raw(&format!("http://{addr}/api"), &params)
            .await
            .unwrap_err();
        assert!(error.is_transport());

        let mut rendered = format!("{error} {error:?}");
        let mut source = std::error::Error::source(&error);
        while let Some(cause) = source {
            rendered.push_str(&format!(" {cause} {cause:?}"));
            source = cause.source();
        }
        assert!(!rendered.contains("SUPERSECRET"), "key leaked: {rendered}");
    }

    #[tokio::test]
    async fn test_client_build_failure_is_configuration_error() {
        let fetcher = QueryFetcher::new(SharedClient::with_factory(|| {
            Err(FetchError::Configuration("no TLS backend".to_string()))
        }));

        let error = fetcher
            .fetch_raw("https://example.test/api", &QueryParameters::new())
            .await
            .unwrap_err();

        assert!(matches!(error, FetchError::Configuration(_)), "unexpected error: {error:?}");
        assert!(!fetcher.shared_client().is_initialized());
    }

    #[test]
    fn test_default_uses_global_client() {
        let fetcher = QueryFetcher::default();
        assert!(fetcher.shared_client().shares_client_with(SharedClient::global()));
    }
}
