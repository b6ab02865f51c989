//! Query parameters and request URL construction

use std::collections::{BTreeMap, HashMap};

use reqwest::Url;

use crate::error::{FetchError, Result};

/// Query-string parameters, keyed by name
///
/// Names are unique and kept sorted, so the encoded query string is stable
/// for a given set of pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters(BTreeMap<String, String>);

impl QueryParameters {
    /// Create an empty parameter set
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set a parameter, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a parameter value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> Extend<(K, V)> for QueryParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for QueryParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for QueryParameters {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for QueryParameters {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// Parse `endpoint` and append `params` to its query string
///
/// Pairs already present in the endpoint are kept. Values are encoded as
/// `application/x-www-form-urlencoded`. With no parameters the URL is left
/// exactly as parsed.
///
/// # Errors
/// [`FetchError::RequestConstruction`] if the endpoint is empty, unparseable,
/// relative, has no host, or uses a scheme other than http/https.
pub fn build_url(endpoint: &str, params: &QueryParameters) -> Result<Url> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        return Err(FetchError::request_construction(endpoint, "endpoint is empty"));
    }

    let mut url =
        Url::parse(trimmed).map_err(|e| FetchError::request_construction(endpoint, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::request_construction(
                endpoint,
                format!("unsupported scheme '{other}'"),
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(FetchError::request_construction(endpoint, "endpoint has no host"));
    }

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in params.iter() {
            pairs.append_pair(name, value);
        }
    }

    Ok(url)
}
