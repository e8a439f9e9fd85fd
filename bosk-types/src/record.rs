//! The node record managed by the resource lifecycle.

use serde::{Deserialize, Serialize};

/// One node of the remote tree: where it lives and what it holds.
///
/// `path` is appended to the provider's base URL and starts with `/`.
/// `value_json` is canonical JSON once it has come back from the remote
/// store; as declared by the caller it is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRecord {
    pub path: String,
    pub value_json: String,
}

impl NodeRecord {
    pub fn new(path: impl Into<String>, value_json: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value_json: value_json.into(),
        }
    }

    /// Returns a copy of this record holding a different value.
    #[must_use]
    pub fn with_value(&self, value_json: impl Into<String>) -> Self {
        Self {
            path: self.path.clone(),
            value_json: value_json.into(),
        }
    }

    /// Serializes the record to a JSON string.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes a record from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
