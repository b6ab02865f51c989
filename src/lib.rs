//! Query client for block-explorer REST APIs
//!
//! [`QueryFetcher`] performs GET requests with query parameters through a
//! pooled [`SharedClient`] and returns the raw body. [`ExplorerClient`]
//! builds on it for the etherscan-style `account`/`txlist` API.
//!
//! ```no_run
//! use explorer_query::{QueryFetcher, QueryParameters, SharedClient};
//!
//! # async fn run() -> explorer_query::Result<()> {
//! let fetcher = QueryFetcher::new(SharedClient::default());
//! let params = QueryParameters::from([("action", "list"), ("offset", "10")]);
//! let body = fetcher.fetch_raw("https://example.test/api", &params).await?;
//! println!("{} bytes", body.len());
//! # Ok(())
//! # }
//! ```

mod config;
mod constants;
mod error;
pub mod explorer;
mod fetcher;
mod http_client;
pub mod logging;
mod query;

pub use config::{ClientConfig, ExplorerConfig};
pub use error::{FetchError, Result};
pub use explorer::{ExplorerClient, ExplorerResponse, SortOrder, TransactionListQuery};
pub use fetcher::QueryFetcher;
pub use http_client::SharedClient;
pub use query::{QueryParameters, build_url};
