// Shared constants for the HTTP layer and the explorer API
// Explorer parameter names follow the etherscan-family "account" module

use std::time::Duration;

// Client defaults
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Environment variables
pub const ENV_EXPLORER_BASE_URL: &str = "EXPLORER_BASE_URL";
pub const ENV_EXPLORER_API_KEY: &str = "EXPLORER_API_KEY";
pub const ENV_LOG_FILTER: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Explorer endpoint
pub const DEFAULT_EXPLORER_BASE_URL: &str = "https://api.snowtrace.io/api";

// Explorer query parameter names
pub const PARAM_API_KEY: &str = "apikey";
pub const PARAM_MODULE: &str = "module";
pub const PARAM_ACTION: &str = "action";
pub const PARAM_ADDRESS: &str = "address";
pub const PARAM_START_BLOCK: &str = "startblock";
pub const PARAM_END_BLOCK: &str = "endblock";
pub const PARAM_SORT: &str = "sort";
pub const PARAM_OFFSET: &str = "offset";
pub const PARAM_PAGE: &str = "page";

// Explorer parameter values
pub const MODULE_ACCOUNT: &str = "account";
pub const ACTION_TXLIST: &str = "txlist";
pub const SORT_ASC: &str = "asc";
pub const SORT_DESC: &str = "desc";

// Transaction list defaults
pub const DEFAULT_START_BLOCK: u64 = 1;
pub const DEFAULT_END_BLOCK: u64 = 999_999_999;
pub const DEFAULT_OFFSET: u32 = 10;
pub const DEFAULT_PAGE: u32 = 1;

// Response envelope
pub const STATUS_SUCCESS: &str = "1";
pub const MESSAGE_NO_TRANSACTIONS: &str = "No transactions found";
