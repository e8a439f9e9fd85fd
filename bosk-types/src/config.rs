//! Provider-level configuration resolved once per provider activation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How requests to the remote tree are authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// HTTP basic authentication with credentials from the environment.
    BasicAuth,
    /// Requests carry no credentials.
    NoAuth,
}

impl AuthMode {
    /// Returns the canonical name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            AuthMode::BasicAuth => "basic_auth",
            AuthMode::NoAuth => "no_auth",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic_auth" => Ok(AuthMode::BasicAuth),
            "no_auth" => Ok(AuthMode::NoAuth),
            other => Err(crate::Error::InvalidAuthMode(other.to_string())),
        }
    }
}

/// Validated provider configuration.
///
/// `base_url` starts with `http://` or `https://` and ends with `/`; the
/// provider only builds one of these after validating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    base_url: String,
    auth_mode: AuthMode,
}

impl ProviderConfig {
    /// Creates a configuration from an already-validated base URL.
    pub fn new(base_url: impl Into<String>, auth_mode: AuthMode) -> Self {
        Self {
            base_url: base_url.into(),
            auth_mode,
        }
    }

    /// Prefix for every node URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }
}

/// HTTP basic credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
