//! Authentication resolution.
//!
//! The provider is configured with a suffix that selects a pair of
//! environment variables, `TF_BOSK_USERNAME_<suffix>` and
//! `TF_BOSK_PASSWORD_<suffix>`. The sentinel suffix `NO_AUTH` turns basic
//! authentication off.

use crate::client::NodeClient;
use crate::error::{ClientError, ClientResult};
use bosk_types::{AuthMode, Credentials, Diagnostic, ProviderConfig};
use std::ffi::OsString;
use tracing::{debug, warn};

/// Prefix of the credential environment variables.
pub const ENV_PREFIX: &str = "TF_BOSK";

/// Suffix that disables basic authentication.
pub const NO_AUTH_SUFFIX: &str = "NO_AUTH";

/// Name of the username variable for `suffix`.
pub fn username_var(suffix: &str) -> String {
    format!("{ENV_PREFIX}_USERNAME_{suffix}")
}

/// Name of the password variable for `suffix`.
pub fn password_var(suffix: &str) -> String {
    format!("{ENV_PREFIX}_PASSWORD_{suffix}")
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct AuthResolution {
    pub auth_mode: AuthMode,
    pub credentials: Option<Credentials>,
    /// Non-fatal findings, e.g. credential variables ignored under `NO_AUTH`.
    pub warnings: Vec<Diagnostic>,
}

impl AuthResolution {
    /// Builds the shared client for `base_url` with the resolved credentials.
    pub fn into_client(self, base_url: impl Into<String>) -> ClientResult<NodeClient> {
        let config = ProviderConfig::new(base_url, self.auth_mode);
        NodeClient::new(config, self.credentials)
    }
}

/// Resolves authentication for `suffix`, reading variables through `lookup`.
///
/// A variable counts as present whenever `lookup` returns a value, even one
/// that is not valid unicode.
pub fn resolve_auth<F>(suffix: &str, lookup: F) -> ClientResult<AuthResolution>
where
    F: Fn(&str) -> Option<OsString>,
{
    let user_key = username_var(suffix);
    let pass_key = password_var(suffix);
    let username = lookup(&user_key);
    let password = lookup(&pass_key);

    if suffix == NO_AUTH_SUFFIX {
        let mut warnings = Vec::new();
        if username.is_some() {
            warnings.push(ignored_variable_warning("username", suffix, &user_key));
        }
        if password.is_some() {
            warnings.push(ignored_variable_warning("password", suffix, &pass_key));
        }
        for warning in &warnings {
            warn!("{}", warning.detail);
        }
        debug!("bosk client configured without authentication");
        return Ok(AuthResolution {
            auth_mode: AuthMode::NoAuth,
            credentials: None,
            warnings,
        });
    }

    match (username, password) {
        (Some(username), Some(password)) => {
            let username = into_unicode(username, &user_key)?;
            let password = into_unicode(password, &pass_key)?;
            debug!(suffix, "bosk client configured with basic auth");
            Ok(AuthResolution {
                auth_mode: AuthMode::BasicAuth,
                credentials: Some(Credentials::new(username, password)),
                warnings: Vec::new(),
            })
        }
        _ => Err(ClientError::Configuration(format!(
            "based on basic_auth_var_suffix of \"{suffix}\", expected to find environment \
             variables \"{user_key}\" and \"{pass_key}\""
        ))),
    }
}

/// [`resolve_auth`] against the process environment.
pub fn resolve_auth_from_env(suffix: &str) -> ClientResult<AuthResolution> {
    resolve_auth(suffix, |name| std::env::var_os(name))
}

fn into_unicode(value: OsString, var: &str) -> ClientResult<String> {
    value
        .into_string()
        .map_err(|_| ClientError::InvalidCredential(var.to_string()))
}

fn ignored_variable_warning(kind: &str, suffix: &str, var: &str) -> Diagnostic {
    Diagnostic::warning(
        format!("NO_AUTH suffix overrides {kind} environment variable"),
        format!(
            "based on basic_auth_var_suffix of \"{suffix}\", ignoring environment variable \"{var}\""
        ),
    )
}
