//! Error types for the bosk client.

use crate::validate::ValidationError;
use bosk_types::Diagnostic;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while configuring the client or talking to the tree.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Bad provider configuration, e.g. missing credential variables.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A credential variable is set but its value is not valid unicode.
    #[error("environment variable \"{0}\" is set but is not valid unicode")]
    InvalidCredential(String),

    /// A base URL, path or node URL failed its syntactic check.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request never produced a response (DNS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote answered with a non-2xx status.
    #[error("{method} returned unexpected status {status}: {body}")]
    Remote {
        method: &'static str,
        status: u16,
        body: String,
    },
}

impl ClientError {
    /// HTTP status of a remote error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the remote reported the node as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Short, stable summary used as the diagnostic headline.
    pub fn summary(&self) -> &'static str {
        match self {
            ClientError::Configuration(_) => "Configuration Error",
            ClientError::InvalidCredential(_) => "Invalid environment variable for authentication",
            ClientError::Validation(err) => err.summary(),
            ClientError::Transport(_) | ClientError::Remote { .. } => "Client Error",
        }
    }
}

impl From<&ClientError> for Diagnostic {
    fn from(err: &ClientError) -> Self {
        Diagnostic::error(err.summary(), err.to_string())
    }
}

impl From<ClientError> for Diagnostic {
    fn from(err: ClientError) -> Self {
        Diagnostic::from(&err)
    }
}
