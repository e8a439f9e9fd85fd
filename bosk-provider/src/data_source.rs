//! The node data source: read-only inspection of one node.

use bosk_client::{validate_node_url, validate_path, NodeStore};
use bosk_types::{Diagnostic, Diagnostics};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Data source block: where the node is, and (after a read) what it holds.
///
/// A node is addressed either by `path`, relative to the provider's base URL,
/// or by an absolute `url`. Exactly one of the two must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDataSourceModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub value_json: Option<String>,
}

impl NodeDataSourceModel {
    pub fn by_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn by_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

/// Reads nodes without taking ownership of them.
#[derive(Clone)]
pub struct NodeDataSource {
    store: Arc<dyn NodeStore>,
}

impl NodeDataSource {
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }

    /// Reads the node described by `config` and returns the model with
    /// `value_json` filled in.
    pub async fn read(
        &self,
        config: &NodeDataSourceModel,
        diags: &mut Diagnostics,
    ) -> Option<NodeDataSourceModel> {
        let url = self.locate(config, diags)?;
        let value_json = self.fetch(&url, diags).await?;

        debug!(url = %url, "read bosk node");
        Some(NodeDataSourceModel {
            value_json: Some(value_json),
            ..config.clone()
        })
    }

    /// Reads the node at `path` below the base URL.
    pub async fn read_path(&self, path: &str, diags: &mut Diagnostics) -> Option<String> {
        self.read(&NodeDataSourceModel::by_path(path), diags)
            .await
            .and_then(|model| model.value_json)
    }

    /// Resolves the model to an absolute URL, recording why it can't be.
    fn locate(&self, config: &NodeDataSourceModel, diags: &mut Diagnostics) -> Option<String> {
        let checked = match (&config.path, &config.url) {
            (Some(path), None) => validate_path(path).map(|()| self.store.node_url(path)),
            (None, Some(url)) => validate_node_url(url).map(|()| url.clone()),
            (Some(_), Some(_)) => {
                diags.add_error(
                    "Conflicting node address",
                    "only one of path and url may be set on a bosk node data source",
                );
                return None;
            }
            (None, None) => {
                diags.add_error(
                    "Missing node address",
                    "one of path or url must be set on a bosk node data source",
                );
                return None;
            }
        };

        match checked {
            Ok(url) => Some(url),
            Err(err) => {
                warn!(error = %err, "invalid data source config");
                diags.push(err);
                None
            }
        }
    }

    async fn fetch(&self, url: &str, diags: &mut Diagnostics) -> Option<String> {
        match self.store.get(url).await {
            Ok(fetched) => {
                diags.append(fetched.warnings);
                Some(fetched.json)
            }
            Err(err) => {
                warn!(error = %err, "Error performing GET");
                diags.push(Diagnostic::from(&err));
                None
            }
        }
    }
}
