//! Core type definitions for the bosk node provider.
//!
//! This crate defines the plain data shared by the client and the provider:
//! - Provider configuration (`base_url`, authentication mode, credentials)
//! - The managed node record (`path` + `value_json`)
//! - Diagnostics, the warning/error records every operation accumulates
//!
//! Nothing here performs I/O.

mod config;
mod diagnostics;
mod record;

pub use config::{AuthMode, Credentials, ProviderConfig};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use record::NodeRecord;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid auth mode: {0}")]
    InvalidAuthMode(String),
}
