//! Provider configuration.
//!
//! [`BoskProvider::configure`] runs once per provider activation. It checks
//! the base URL, resolves credentials and builds the one client every
//! resource and data source shares for the rest of the activation.

use crate::data_source::NodeDataSource;
use crate::resource::NodeResource;
use crate::schema::{
    node_data_source_schema, node_resource_schema, node_type_name, provider_schema,
    ProviderMetadata, Schema, PROVIDER_TYPE_NAME,
};
use bosk_client::{resolve_auth, validate_base_url, ClientError, NodeStore};
use bosk_types::{Diagnostic, Diagnostics};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::sync::Arc;
use tracing::{debug, warn};

/// The provider block as declared by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderModel {
    pub base_url: String,
    pub basic_auth_var_suffix: String,
}

impl ProviderModel {
    pub fn new(base_url: impl Into<String>, basic_auth_var_suffix: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            basic_auth_var_suffix: basic_auth_var_suffix.into(),
        }
    }
}

/// Handle produced by configuration and passed to every resource and data
/// source.
#[derive(Clone)]
pub struct ProviderData {
    store: Arc<dyn NodeStore>,
}

impl ProviderData {
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn NodeStore> {
        &self.store
    }

    pub fn node_resource(&self) -> NodeResource {
        NodeResource::new(self.store.clone())
    }

    pub fn node_data_source(&self) -> NodeDataSource {
        NodeDataSource::new(self.store.clone())
    }
}

impl std::fmt::Debug for ProviderData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderData")
            .field("base_url", &self.store.base_url())
            .finish()
    }
}

/// The bosk provider.
#[derive(Debug, Clone)]
pub struct BoskProvider {
    version: String,
}

impl BoskProvider {
    /// `version` is the release version, `"dev"` for local builds or
    /// `"test"` under acceptance tests.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    pub fn schema(&self) -> Schema {
        provider_schema()
    }

    /// Type names and schemas of the resources this provider offers.
    pub fn resources(&self) -> Vec<(String, Schema)> {
        vec![(node_type_name(PROVIDER_TYPE_NAME), node_resource_schema())]
    }

    /// Type names and schemas of the data sources this provider offers.
    pub fn data_sources(&self) -> Vec<(String, Schema)> {
        vec![(node_type_name(PROVIDER_TYPE_NAME), node_data_source_schema())]
    }

    /// Configures the provider from the process environment.
    pub fn configure(&self, model: &ProviderModel, diags: &mut Diagnostics) -> Option<ProviderData> {
        self.configure_with(model, |name| std::env::var_os(name), diags)
    }

    /// Configures the provider, reading credential variables through `lookup`.
    ///
    /// Base URL problems and credential problems are all reported before
    /// giving up. Returns `None` when any error was recorded.
    pub fn configure_with<F>(
        &self,
        model: &ProviderModel,
        lookup: F,
        diags: &mut Diagnostics,
    ) -> Option<ProviderData>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if let Err(errors) = validate_base_url(&model.base_url) {
            diags.append(errors.into_iter().map(Diagnostic::from));
        }

        let resolution = match resolve_auth(&model.basic_auth_var_suffix, lookup) {
            Ok(resolution) => {
                diags.append(resolution.warnings.iter().cloned());
                Some(resolution)
            }
            Err(err @ ClientError::InvalidCredential(_)) => {
                diags.push(&err);
                None
            }
            Err(err) => {
                diags.add_error("Missing environment variables for authentication", err.to_string());
                None
            }
        };

        if diags.has_error() {
            warn!(diagnostics = ?diags, "provider configuration failed");
            return None;
        }

        let client = match resolution?.into_client(model.base_url.clone()) {
            Ok(client) => client,
            Err(err) => {
                diags.push(&err);
                warn!(error = %err, "unable to create bosk client");
                return None;
            }
        };

        debug!(
            base_url = %model.base_url,
            auth_mode = %client.auth_mode(),
            "configured bosk provider"
        );
        Some(ProviderData::new(Arc::new(client)))
    }
}
