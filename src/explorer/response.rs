use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::constants::{MESSAGE_NO_TRANSACTIONS, STATUS_SUCCESS};
use crate::error::{FetchError, Result};

/// One loosely-typed record from the `result` list
///
/// Record fields differ between actions and explorers, so they stay dynamic.
pub type Record = Map<String, Value>;

/// Response envelope shared by every explorer action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerResponse {
    /// `"1"` on success, `"0"` otherwise
    pub status:  String,
    /// Human readable status, e.g. `OK` or `NOTOK`
    pub message: String,
    /// Payload of the call
    #[serde(default, deserialize_with = "null_as_default")]
    pub result:  ExplorerResult,
}

/// The `result` field: records on success, often a plain string on failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExplorerResult {
    /// List of records
    Records(Vec<Record>),
    /// Error or informational text
    Message(String),
}

impl Default for ExplorerResult {
    fn default() -> Self {
        Self::Records(Vec::new())
    }
}

fn null_as_default<'de, D>(deserializer: D) -> std::result::Result<ExplorerResult, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<ExplorerResult>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ExplorerResponse {
    /// Whether the explorer reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Whether the explorer reported an empty history rather than a failure
    #[must_use]
    pub fn is_no_transactions(&self) -> bool {
        !self.is_success() && self.message == MESSAGE_NO_TRANSACTIONS
    }

    /// Records in the result, empty when the result is a message
    #[must_use]
    pub fn records(&self) -> &[Record] {
        match &self.result {
            ExplorerResult::Records(records) => records.as_slice(),
            ExplorerResult::Message(_) => &[],
        }
    }

    /// Text of a message-shaped result
    #[must_use]
    pub fn result_message(&self) -> Option<&str> {
        match &self.result {
            ExplorerResult::Message(message) => Some(message.as_str()),
            ExplorerResult::Records(_) => None,
        }
    }

    /// Turn a non-success envelope into [`FetchError::Api`]
    ///
    /// # Errors
    /// [`FetchError::Api`] when `status` is not `"1"`; the message includes a
    /// string `result` when the explorer sent one.
    pub fn into_success(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = match self.result_message() {
                Some(detail) if !detail.is_empty() => format!("{} ({detail})", self.message),
                _ => self.message.clone(),
            };
            Err(FetchError::Api {
                status: self.status,
                message,
            })
        }
    }
}
