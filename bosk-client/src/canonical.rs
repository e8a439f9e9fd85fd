//! JSON canonicalization.
//!
//! Values are parsed into [`serde_json::Value`] and written back compactly:
//! no insignificant whitespace, object keys in sorted order. Canonicalizing
//! canonical output returns the same bytes.

use thiserror::Error;

/// The input was not valid JSON. Carries the input back unchanged.
#[derive(Debug, Error)]
#[error("invalid JSON: {source}")]
pub struct CanonicalizeError {
    original: Vec<u8>,
    source: serde_json::Error,
}

impl CanonicalizeError {
    /// The bytes that failed to parse.
    pub fn original(&self) -> &[u8] {
        &self.original
    }

    pub fn into_original(self) -> Vec<u8> {
        self.original
    }
}

/// Re-encodes `input` in canonical form.
pub fn canonicalize(input: &[u8]) -> Result<Vec<u8>, CanonicalizeError> {
    let fail = |source| CanonicalizeError {
        original: input.to_vec(),
        source,
    };
    let parsed: serde_json::Value = serde_json::from_slice(input).map_err(fail)?;
    serde_json::to_vec(&parsed).map_err(fail)
}

/// String form of [`canonicalize`].
pub fn canonicalize_str(input: &str) -> Result<String, CanonicalizeError> {
    let bytes = canonicalize(input.as_bytes())?;
    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
