use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors surfaced by the fetcher and the explorer client
///
/// None of these are fatal: the caller decides whether to retry, log or abort.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The endpoint or parameters could not be turned into a request.
    /// No network dispatch took place.
    #[error("Invalid request for endpoint '{endpoint}': {reason}")]
    RequestConstruction {
        /// Endpoint as supplied by the caller
        endpoint: String,
        /// Why the request could not be built
        reason:   String,
    },

    /// The request could not be dispatched or the connection failed
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        /// Endpoint the request was sent to
        endpoint: String,
        /// Underlying HTTP client error
        #[source]
        source:   reqwest::Error,
    },

    /// The response body could not be read to completion
    #[error("Failed to read response body from {endpoint}: {source}")]
    Read {
        /// Endpoint the response came from
        endpoint: String,
        /// Underlying HTTP client error
        #[source]
        source:   reqwest::Error,
    },

    /// The response body was not the JSON shape the caller asked for
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        /// Endpoint the response came from
        endpoint: String,
        /// Underlying JSON error
        #[source]
        source:   serde_json::Error,
    },

    /// The explorer answered with a non-success status
    #[error("Explorer returned status {status}: {message}")]
    Api {
        /// Raw `status` field of the envelope
        status:  String,
        /// Raw `message` field of the envelope
        message: String,
    },

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FetchError {
    pub(crate) fn request_construction(endpoint: &str, reason: impl Into<String>) -> Self {
        Self::RequestConstruction {
            endpoint: endpoint.to_string(),
            reason:   reason.into(),
        }
    }

    /// Whether the failure happened before anything reached the network
    #[must_use]
    pub const fn is_request_construction(&self) -> bool {
        matches!(self, Self::RequestConstruction { .. })
    }

    /// Whether the failure was a connection or dispatch problem
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Whether the failure happened while reading the body
    #[must_use]
    pub const fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }
}
