//! Client side of the bosk node provider.
//!
//! Everything needed to talk to one bosk state tree over HTTP:
//!
//! - **auth**: resolves basic-auth credentials from `TF_BOSK_*` environment
//!   variables, or decides on no authentication (`NO_AUTH`)
//! - **client**: [`NodeClient`], issuing GET/PUT/DELETE against
//!   `base_url + path` and classifying responses
//! - **canonical**: normalizes JSON so formatting differences never look like
//!   changes
//! - **validate**: syntactic checks on base URLs, node paths and node URLs,
//!   run before any request is sent
//! - **hcl**: renders JSON as an HCL `jsonencode(...)` expression for
//!   writing declarations by hand
//!
//! # Example
//!
//! ```no_run
//! use bosk_client::{resolve_auth_from_env, NodeStore};
//!
//! # async fn run() -> bosk_client::ClientResult<()> {
//! let client = resolve_auth_from_env("NO_AUTH")?.into_client("http://localhost:1740/")?;
//! let url = client.node_url("/bosk/world");
//! let fetched = client.get(&url).await?;
//! println!("{}", fetched.json);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod canonical;
pub mod client;
mod error;
pub mod hcl;
pub mod store;
pub mod validate;

pub use auth::{
    password_var, resolve_auth, resolve_auth_from_env, username_var, AuthResolution, ENV_PREFIX,
    NO_AUTH_SUFFIX,
};
pub use canonical::{canonicalize, canonicalize_str, CanonicalizeError};
pub use client::{normalize_body, Fetched, NodeClient, DEFAULT_REQUEST_TIMEOUT};
pub use error::{ClientError, ClientResult};
pub use hcl::to_hcl;
pub use store::NodeStore;
pub use validate::{validate_base_url, validate_node_url, validate_path, ValidationError};
