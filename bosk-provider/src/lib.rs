//! Node resource reconciliation for bosk state trees.
//!
//! The provider is configured once with a base URL and an authentication
//! suffix. Configuration produces [`ProviderData`], a shared handle to the
//! remote tree, which is handed to every [`NodeResource`] and
//! [`NodeDataSource`].
//!
//! ## Lifecycle
//!
//! ```text
//!            create / import            update
//!   Absent ──────────────────▶ Present ◀──────┐
//!      ▲                          │  └────────┘
//!      └──────── delete ──────────┘   read (probe)
//! ```
//!
//! Every operation takes the caller's [`Diagnostics`](bosk_types::Diagnostics)
//! sink. Problems are pushed there rather than returned one at a time; an
//! operation whose sink gained an error returns `None` (or `false`) and leaves
//! the caller's state alone.
//!
//! # Example
//!
//! ```no_run
//! use bosk_provider::{BoskProvider, ProviderModel};
//! use bosk_types::{Diagnostics, NodeRecord};
//!
//! # async fn run() {
//! let provider = BoskProvider::new("dev");
//! let mut diags = Diagnostics::new();
//! let model = ProviderModel::new("http://localhost:1740/", "NO_AUTH");
//! let Some(data) = provider.configure(&model, &mut diags) else { return };
//!
//! let resource = data.node_resource();
//! let plan = NodeRecord::new("/bosk/world", r#"{"id":"world"}"#);
//! let state = resource.create(&plan, &mut diags).await;
//! # }
//! ```

pub mod data_source;
pub mod provider;
pub mod resource;
pub mod schema;

pub use data_source::{NodeDataSource, NodeDataSourceModel};
pub use provider::{BoskProvider, ProviderData, ProviderModel};
pub use resource::NodeResource;
pub use schema::{Attribute, AttributeKind, ProviderMetadata, Schema, PROVIDER_TYPE_NAME};
