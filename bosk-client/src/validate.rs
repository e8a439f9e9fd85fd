//! Syntactic checks run before any request is sent.
//!
//! All checks are pure. A failing check means the operation must not issue
//! an HTTP request.

use bosk_types::Diagnostic;
use thiserror::Error;

/// A base URL, node path or node URL with the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected base_url to start with either \"http://\" or \"https://\", got: {0}")]
    BaseUrlScheme(String),

    #[error("expected base_url to end with a slash character \"/\", got: {0}")]
    BaseUrlTrailingSlash(String),

    #[error("bosk node paths must start with a slash, got: {0}")]
    PathLeadingSlash(String),

    #[error("expected url to start with either \"http://\" or \"https://\", got: {0}")]
    UrlScheme(String),
}

impl ValidationError {
    pub fn summary(&self) -> &'static str {
        match self {
            ValidationError::BaseUrlScheme(_) => "Base URL must be http or https",
            ValidationError::BaseUrlTrailingSlash(_) => "Base URL must end with \"/\"",
            ValidationError::PathLeadingSlash(_) => {
                "Path does not start with slash character \"/\""
            }
            ValidationError::UrlScheme(_) => "URL must be http or https",
        }
    }

    /// The value that failed the check.
    pub fn value(&self) -> &str {
        match self {
            ValidationError::BaseUrlScheme(v)
            | ValidationError::BaseUrlTrailingSlash(v)
            | ValidationError::PathLeadingSlash(v)
            | ValidationError::UrlScheme(v) => v,
        }
    }
}

impl From<ValidationError> for Diagnostic {
    fn from(err: ValidationError) -> Self {
        Diagnostic::error(err.summary(), err.to_string())
    }
}

fn has_http_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Checks that `url` is usable as a prefix for node paths.
///
/// Scheme and trailing slash are checked independently; when both are wrong
/// both errors are returned.
pub fn validate_base_url(url: &str) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    if !has_http_scheme(url) {
        errors.push(ValidationError::BaseUrlScheme(url.to_string()));
    }
    if !url.ends_with('/') {
        errors.push(ValidationError::BaseUrlTrailingSlash(url.to_string()));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that a node path starts with `/`.
pub fn validate_path(path: &str) -> Result<(), ValidationError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(ValidationError::PathLeadingSlash(path.to_string()))
    }
}

/// Checks that an absolute node URL uses http or https.
pub fn validate_node_url(url: &str) -> Result<(), ValidationError> {
    if has_http_scheme(url) {
        Ok(())
    } else {
        Err(ValidationError::UrlScheme(url.to_string()))
    }
}
