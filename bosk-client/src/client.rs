//! HTTP client for a bosk state tree.
//!
//! One [`NodeClient`] is built per provider activation and shared by every
//! resource and data source. It never changes after construction.

use crate::canonical::canonicalize;
use crate::error::{ClientError, ClientResult};
use crate::store::NodeStore;
use crate::validate::validate_base_url;
use async_trait::async_trait;
use bosk_types::{AuthMode, Credentials, Diagnostic, ProviderConfig};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound on a single request, including reading the body.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Body of a successful GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// Canonical JSON, or the raw body when it could not be parsed.
    pub json: String,
    /// Non-fatal problems found while decoding the body.
    pub warnings: Vec<Diagnostic>,
}

/// Client for one bosk state tree.
#[derive(Debug, Clone)]
pub struct NodeClient {
    http: Client,
    config: ProviderConfig,
    credentials: Option<Credentials>,
}

impl NodeClient {
    /// Creates a client with the default request timeout.
    pub fn new(config: ProviderConfig, credentials: Option<Credentials>) -> ClientResult<Self> {
        Self::with_timeout(config, credentials, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates a client whose requests give up after `timeout`.
    ///
    /// The base URL must pass [`validate_base_url`]; the first problem found
    /// is returned. Credentials must be present exactly when the mode is
    /// basic auth.
    pub fn with_timeout(
        config: ProviderConfig,
        credentials: Option<Credentials>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        if let Err(errors) = validate_base_url(config.base_url()) {
            if let Some(first) = errors.into_iter().next() {
                return Err(first.into());
            }
        }

        match (config.auth_mode(), &credentials) {
            (AuthMode::BasicAuth, None) => {
                return Err(ClientError::Configuration(
                    "basic auth selected but no credentials were supplied".to_string(),
                ));
            }
            (AuthMode::NoAuth, Some(_)) => {
                return Err(ClientError::Configuration(
                    "credentials supplied but authentication is disabled".to_string(),
                ));
            }
            _ => {}
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            credentials,
        })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.config.auth_mode()
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.credentials {
            Some(creds) => builder.basic_auth(&creds.username, Some(&creds.password)),
            None => builder,
        }
    }

    /// Sends `builder` and turns anything but a 2xx response into an error.
    async fn send(&self, method: &'static str, builder: RequestBuilder) -> ClientResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("unable to {method} node: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Remote {
                method,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl NodeStore for NodeClient {
    fn base_url(&self) -> &str {
        self.config.base_url()
    }

    async fn get(&self, url: &str) -> ClientResult<Fetched> {
        debug!(url, "GET bosk node");
        let response = self.send("GET", self.request(Method::GET, url)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(format!("error reading response body: {e}")))?;
        Ok(normalize_body(&bytes))
    }

    async fn put(&self, url: &str, value_json: &str) -> ClientResult<()> {
        debug!(url, bytes = value_json.len(), "PUT bosk node");
        let builder = self
            .request(Method::PUT, url)
            .header(CONTENT_TYPE, "application/json")
            .body(value_json.to_owned());
        self.send("PUT", builder).await?;
        Ok(())
    }

    async fn delete(&self, url: &str) -> ClientResult<()> {
        debug!(url, "DELETE bosk node");
        self.send("DELETE", self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}

/// Decodes a response body into canonical JSON.
///
/// Never fails: a body that is not UTF-8 or not JSON is passed through with
/// a warning attached.
pub fn normalize_body(bytes: &[u8]) -> Fetched {
    let mut warnings = Vec::new();

    if std::str::from_utf8(bytes).is_err() {
        warn!("response body is not valid UTF-8");
        warnings.push(Diagnostic::warning(
            "Response body is not recognized as UTF-8",
            "the host may not properly handle value_json if the contents are binary",
        ));
    }

    match canonicalize(bytes) {
        Ok(canonical) => Fetched {
            json: String::from_utf8_lossy(&canonical).into_owned(),
            warnings,
        },
        Err(err) => {
            warn!(error = %err, "returning response body without normalization");
            warnings.push(Diagnostic::warning(
                "Error normalizing JSON response",
                format!("error reading response body: {err}"),
            ));
            Fetched {
                json: String::from_utf8_lossy(&err.into_original()).into_owned(),
                warnings,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationError;
    use bosk_types::Severity;

    #[test]
    fn normalize_valid_json_has_no_warnings() {
        let fetched = normalize_body(b"{ \"a\" : [1, 2] }");
        assert_eq!(fetched.json, r#"{"a":[1,2]}"#);
        assert!(fetched.warnings.is_empty());
    }

    #[test]
    fn normalize_invalid_json_falls_back_to_raw() {
        let fetched = normalize_body(b"not json");
        assert_eq!(fetched.json, "not json");
        assert_eq!(fetched.warnings.len(), 1);
        assert_eq!(fetched.warnings[0].severity, Severity::Warning);
        assert_eq!(fetched.warnings[0].summary, "Error normalizing JSON response");
    }

    #[test]
    fn normalize_binary_body_warns_twice() {
        let fetched = normalize_body(&[0xff, 0xfe, 0x00]);
        let summaries: Vec<_> = fetched.warnings.iter().map(|w| w.summary.as_str()).collect();
        assert_eq!(
            summaries,
            vec!["Response body is not recognized as UTF-8", "Error normalizing JSON response"]
        );
    }

    #[test]
    fn basic_auth_requires_credentials() {
        let config = ProviderConfig::new("http://localhost/", AuthMode::BasicAuth);
        let err = NodeClient::new(config, None).unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn no_auth_rejects_credentials() {
        let config = ProviderConfig::new("http://localhost/", AuthMode::NoAuth);
        let err = NodeClient::new(config, Some(Credentials::new("u", "p"))).unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn rejects_base_url_without_http_scheme() {
        let config = ProviderConfig::new("ftp://x", AuthMode::NoAuth);
        let err = NodeClient::new(config, None).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Validation(ValidationError::BaseUrlScheme(ref url)) if url == "ftp://x"
        ));
    }

    #[test]
    fn rejects_base_url_without_trailing_slash() {
        let config = ProviderConfig::new("http://localhost:1740", AuthMode::NoAuth);
        let err = NodeClient::new(config, None).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Validation(ValidationError::BaseUrlTrailingSlash(_))
        ));
    }

    #[test]
    fn node_url_concatenates() {
        let config = ProviderConfig::new("http://localhost:1740/", AuthMode::NoAuth);
        let client = NodeClient::new(config, None).unwrap();
        assert_eq!(client.node_url("/bosk/x"), "http://localhost:1740//bosk/x");
    }
}
