use bosk_types::{AuthMode, Credentials, Diagnostic, Diagnostics, NodeRecord, ProviderConfig, Severity};
use pretty_assertions::assert_eq;

// ── AuthMode ────────────────────────────────────────────────────

#[test]
fn auth_mode_display_and_parse() {
    assert_eq!(AuthMode::BasicAuth.to_string(), "basic_auth");
    assert_eq!(AuthMode::NoAuth.to_string(), "no_auth");
    assert_eq!("basic_auth".parse::<AuthMode>().unwrap(), AuthMode::BasicAuth);
    assert_eq!("no_auth".parse::<AuthMode>().unwrap(), AuthMode::NoAuth);
}

#[test]
fn auth_mode_parse_rejects_unknown() {
    let err = "oauth".parse::<AuthMode>().unwrap_err();
    assert!(format!("{err}").contains("invalid auth mode"));
    assert!(format!("{err}").contains("oauth"));
}

#[test]
fn auth_mode_serde_uses_snake_case() {
    let json = serde_json::to_string(&AuthMode::NoAuth).unwrap();
    assert_eq!(json, "\"no_auth\"");
}

// ── ProviderConfig / Credentials ────────────────────────────────

#[test]
fn provider_config_accessors() {
    let config = ProviderConfig::new("http://localhost:1740/", AuthMode::NoAuth);
    assert_eq!(config.base_url(), "http://localhost:1740/");
    assert_eq!(config.auth_mode(), AuthMode::NoAuth);
}

#[test]
fn credentials_debug_hides_password() {
    let creds = Credentials::new("admin", "hunter2");
    let debug = format!("{creds:?}");
    assert!(debug.contains("admin"));
    assert!(!debug.contains("hunter2"));
}

// ── NodeRecord ──────────────────────────────────────────────────

#[test]
fn node_record_with_value_keeps_path() {
    let record = NodeRecord::new("/bosk/x", "[]");
    let updated = record.with_value("[1]");
    assert_eq!(updated.path, "/bosk/x");
    assert_eq!(updated.value_json, "[1]");
    assert_eq!(record.value_json, "[]");
}

#[test]
fn node_record_json_roundtrip() {
    let record = NodeRecord::new("/bosk/x", r#"{"id":"x"}"#);
    let json = record.to_json().unwrap();
    assert_eq!(NodeRecord::from_json(&json).unwrap(), record);
}

#[test]
fn node_record_from_bad_json_is_serialization_error() {
    let err = NodeRecord::from_json("{").unwrap_err();
    assert!(format!("{err}").contains("serialization"));
}

// ── Diagnostics ─────────────────────────────────────────────────

#[test]
fn empty_diagnostics_has_no_error() {
    let diags = Diagnostics::new();
    assert!(diags.is_empty());
    assert!(!diags.has_error());
}

#[test]
fn warnings_alone_are_not_errors() {
    let mut diags = Diagnostics::new();
    diags.add_warning("careful", "something odd");
    assert_eq!(diags.len(), 1);
    assert!(!diags.has_error());
    assert_eq!(diags.warnings().count(), 1);
}

#[test]
fn diagnostics_accumulate_in_order() {
    let mut diags = Diagnostics::new();
    diags.add_error("first", "a");
    diags.add_warning("second", "b");
    diags.push(Diagnostic::error("third", "c"));

    assert!(diags.has_error());
    let summaries: Vec<_> = diags.iter().map(|d| d.summary.as_str()).collect();
    assert_eq!(summaries, vec!["first", "second", "third"]);
    assert_eq!(diags.errors().count(), 2);
}

#[test]
fn diagnostics_append_merges_lists() {
    let mut diags = Diagnostics::new();
    diags.add_warning("w", "1");
    diags.append(vec![Diagnostic::error("e", "2")]);
    let items = diags.into_vec();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].severity, Severity::Error);
}

#[test]
fn diagnostic_display_includes_severity() {
    let diag = Diagnostic::error("Client Error", "boom");
    assert_eq!(diag.to_string(), "error: Client Error: boom");
}

#[test]
fn diagnostics_serialize_as_list() {
    let mut diags = Diagnostics::new();
    diags.add_warning("w", "d");
    let json = serde_json::to_value(&diags).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"severity": "warning", "summary": "w", "detail": "d"}])
    );
}
