//! Remote node store abstraction.
//!
//! The provider's resource and data source talk to the tree only through
//! this trait, so they can share one [`NodeClient`](crate::NodeClient) or run
//! against any other implementation.

use crate::client::Fetched;
use crate::error::ClientResult;
use async_trait::async_trait;

/// Abstract remote tree interface.
///
/// Implementations are shared read-only between concurrent operations.
#[async_trait]
pub trait NodeStore: Send + Sync {
    /// Prefix prepended to node paths. Ends with `/`.
    fn base_url(&self) -> &str;

    /// Absolute URL of the node at `path`: the base URL followed by the path,
    /// concatenated as-is.
    fn node_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Reads the node at `url`, canonicalizing its JSON where possible.
    async fn get(&self, url: &str) -> ClientResult<Fetched>;

    /// Replaces the node at `url` with `value_json`.
    async fn put(&self, url: &str, value_json: &str) -> ClientResult<()>;

    /// Removes the node at `url`. A missing node is an error.
    async fn delete(&self, url: &str) -> ClientResult<()>;
}
