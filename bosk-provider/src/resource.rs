//! The node resource: lifecycle of one managed node.

use bosk_client::{validate_path, ClientError, NodeStore};
use bosk_types::{Diagnostic, Diagnostics, NodeRecord};
use std::sync::Arc;
use tracing::{debug, warn};

/// Creates, reads, updates, deletes and imports one node per record.
///
/// Holds no state of its own besides the shared store handle; the record
/// passed in by the host is the only copy of declared state.
#[derive(Clone)]
pub struct NodeResource {
    store: Arc<dyn NodeStore>,
}

impl NodeResource {
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }

    /// Writes the planned value to the tree.
    ///
    /// On success the plan becomes the new state. On failure nothing is
    /// persisted.
    pub async fn create(&self, plan: &NodeRecord, diags: &mut Diagnostics) -> Option<NodeRecord> {
        if !validate(plan, diags) {
            warn!(diagnostics = ?diags, "invalid plan");
            return None;
        }

        let url = self.store.node_url(&plan.path);
        if let Err(err) = self.store.put(&url, &plan.value_json).await {
            record_failure(&err, diags, "Error performing PUT");
            return None;
        }

        debug!(path = %plan.path, "created bosk node");
        Some(plan.clone())
    }

    /// Refreshes `state` from the tree.
    ///
    /// Returns the record with `value_json` replaced by what the tree holds.
    /// Returns `None` on any error; the caller keeps its stored state.
    pub async fn read(&self, state: &NodeRecord, diags: &mut Diagnostics) -> Option<NodeRecord> {
        if !validate(state, diags) {
            warn!(diagnostics = ?diags, "invalid state");
            return None;
        }

        let value_json = self.fetch(&state.path, diags).await?;
        debug!(path = %state.path, "read bosk node");
        Some(state.with_value(value_json))
    }

    /// Writes a changed value for a node already under management.
    pub async fn update(&self, plan: &NodeRecord, diags: &mut Diagnostics) -> Option<NodeRecord> {
        if !validate(plan, diags) {
            warn!(diagnostics = ?diags, "invalid plan");
            return None;
        }

        let url = self.store.node_url(&plan.path);
        if let Err(err) = self.store.put(&url, &plan.value_json).await {
            record_failure(&err, diags, "Error performing PUT");
            return None;
        }

        debug!(path = %plan.path, "updated bosk node");
        Some(plan.clone())
    }

    /// Removes the node. Returns `true` once the tree has accepted the
    /// delete; a node that is already gone is reported as an error.
    pub async fn delete(&self, state: &NodeRecord, diags: &mut Diagnostics) -> bool {
        if !validate(state, diags) {
            warn!(diagnostics = ?diags, "invalid state");
            return false;
        }

        let url = self.store.node_url(&state.path);
        if let Err(err) = self.store.delete(&url).await {
            record_failure(&err, diags, "Error performing DELETE");
            return false;
        }

        debug!(path = %state.path, "deleted bosk node");
        true
    }

    /// Adopts an existing node, using `id` as its path.
    ///
    /// The resulting record holds the same canonical value a subsequent
    /// [`read`](Self::read) would produce.
    pub async fn import_state(&self, id: &str, diags: &mut Diagnostics) -> Option<NodeRecord> {
        if let Err(err) = validate_path(id) {
            diags.push(err);
            warn!(diagnostics = ?diags, "invalid import id");
            return None;
        }

        let value_json = self.fetch(id, diags).await?;
        debug!(path = %id, "imported bosk node");
        Some(NodeRecord::new(id, value_json))
    }

    async fn fetch(&self, path: &str, diags: &mut Diagnostics) -> Option<String> {
        let url = self.store.node_url(path);
        match self.store.get(&url).await {
            Ok(fetched) => {
                diags.append(fetched.warnings);
                Some(fetched.json)
            }
            Err(err) => {
                record_failure(&err, diags, "Error performing GET");
                None
            }
        }
    }
}

fn validate(record: &NodeRecord, diags: &mut Diagnostics) -> bool {
    match validate_path(&record.path) {
        Ok(()) => true,
        Err(err) => {
            diags.push(err);
            false
        }
    }
}

fn record_failure(err: &ClientError, diags: &mut Diagnostics, context: &str) {
    diags.push(Diagnostic::from(err));
    warn!(error = %err, "{context}");
}
