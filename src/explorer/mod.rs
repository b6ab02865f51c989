//! Typed client for etherscan-family block explorers
//!
//! Thin layer over [`QueryFetcher`]: it fills in the API key and the
//! `account`/`txlist` parameters, and decodes the `{status, message, result}`
//! envelope. What the records mean is left to the caller.

mod query;
mod response;

pub use query::{SortOrder, TransactionListQuery};
pub use response::{ExplorerResponse, ExplorerResult, Record};
use tracing::debug;

use crate::config::ExplorerConfig;
use crate::error::Result;
use crate::fetcher::QueryFetcher;

/// Client for one explorer API endpoint
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    config:  ExplorerConfig,
    fetcher: QueryFetcher,
}

impl ExplorerClient {
    /// Create a client dispatching through `fetcher`
    #[must_use]
    pub const fn new(config: ExplorerConfig, fetcher: QueryFetcher) -> Self {
        Self { config, fetcher }
    }

    /// Create a client on the process-wide shared HTTP client
    #[must_use]
    pub fn from_config(config: ExplorerConfig) -> Self {
        Self::new(config, QueryFetcher::default())
    }

    /// Configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Raw body of a transaction list request
    ///
    /// # Errors
    /// Same as [`QueryFetcher::fetch_raw`].
    pub async fn fetch_transactions_raw(&self, query: TransactionListQuery) -> Result<Vec<u8>> {
        let params = query.into_parameters(self.config.api_key());
        self.fetcher
            .fetch_raw(self.config.base_url(), &params)
            .await
    }

    /// Transaction list for an address, decoded into the response envelope
    ///
    /// The envelope is returned as-is; check [`ExplorerResponse::is_success`]
    /// or call [`ExplorerResponse::into_success`].
    ///
    /// # Errors
    /// Same as [`QueryFetcher::fetch_json`]; a non-success envelope is not an
    /// error here.
    pub async fn list_transactions(&self, query: TransactionListQuery) -> Result<ExplorerResponse> {
        debug!(address = query.address(), "Listing transactions");
        let params = query.into_parameters(self.config.api_key());
        self.fetcher
            .fetch_json(self.config.base_url(), &params)
            .await
    }

    /// Whether `address` has at least one transaction
    ///
    /// Asks for the single most recent transaction. An explorer reply of
    /// "No transactions found" counts as `false`; any other failure status is
    /// an error.
    ///
    /// # Errors
    /// Anything [`list_transactions`](Self::list_transactions) returns, plus
    /// [`FetchError::Api`](crate::FetchError::Api) for a non-success status
    /// other than "No transactions found".
    pub async fn has_transactions(&self, address: &str) -> Result<bool> {
        let response = self
            .list_transactions(TransactionListQuery::latest(address))
            .await?;

        if response.is_no_transactions() {
            debug!(address, "No transactions yet");
            return Ok(false);
        }

        let response = response.into_success()?;
        Ok(!response.records().is_empty())
    }
}
