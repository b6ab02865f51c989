//! Shared HTTP client with connection pooling
//!
//! A [`SharedClient`] is a cheap, cloneable handle around one lazily built
//! `reqwest::Client`. Every clone of a handle dispatches through the same
//! client, so connections are pooled across calls. The client is built on
//! first use and never replaced.

use std::fmt;
use std::sync::{Arc, LazyLock};

use once_cell::sync::OnceCell;
use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Result;

type ClientFactory = dyn Fn() -> Result<Client> + Send + Sync;

/// Process-wide default handle for callers that do not build their own
static GLOBAL_CLIENT: LazyLock<SharedClient> = LazyLock::new(SharedClient::default);

/// Reusable, lazily initialized HTTP client handle
#[derive(Clone)]
pub struct SharedClient {
    inner: Arc<Inner>,
}

struct Inner {
    client:  OnceCell<Client>,
    factory: Box<ClientFactory>,
}

impl SharedClient {
    /// Create a handle whose client is built from `config` on first use
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_factory(move || config.build_client())
    }

    /// Create a handle with a custom client factory
    ///
    /// The factory runs at most once per handle, even when several tasks
    /// race on first use. If it fails, the error is returned and the next
    /// call tries again.
    #[must_use]
    pub fn with_factory<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Client> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                client:  OnceCell::new(),
                factory: Box::new(factory),
            }),
        }
    }

    /// Get the process-wide default handle
    ///
    /// Built with [`ClientConfig::default`]; every call returns the same
    /// handle.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_CLIENT
    }

    /// Get the underlying client, building it on first use
    ///
    /// # Errors
    /// Returns whatever the factory returns when the build fails, normally
    /// [`FetchError::Configuration`](crate::FetchError::Configuration).
    pub fn client(&self) -> Result<&Client> {
        self.inner.client.get_or_try_init(|| {
            debug!("Initializing shared HTTP client");
            (self.inner.factory)()
        })
    }

    /// Whether the underlying client has been built yet
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.client.get().is_some()
    }

    /// Whether two handles share the same underlying client
    #[must_use]
    pub fn shares_client_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for SharedClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl fmt::Debug for SharedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedClient")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
