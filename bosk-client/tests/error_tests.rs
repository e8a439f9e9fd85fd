use bosk_client::{ClientError, ValidationError};
use bosk_types::{Diagnostic, Severity};

#[test]
fn error_display_configuration() {
    let err = ClientError::Configuration("missing variables".into());
    assert!(format!("{err}").contains("configuration error"));
    assert!(format!("{err}").contains("missing variables"));
}

#[test]
fn error_display_invalid_credential_names_variable() {
    let err = ClientError::InvalidCredential("TF_BOSK_PASSWORD_PROD".into());
    assert!(format!("{err}").contains("TF_BOSK_PASSWORD_PROD"));
    assert!(format!("{err}").contains("not valid unicode"));
    assert_eq!(err.summary(), "Invalid environment variable for authentication");
}

#[test]
fn error_display_transport() {
    let err = ClientError::Transport("connection refused".into());
    assert!(format!("{err}").contains("transport error"));
    assert!(format!("{err}").contains("connection refused"));
}

#[test]
fn error_display_remote_includes_status_and_body() {
    let err = ClientError::Remote {
        method: "GET",
        status: 404,
        body: "no such node".into(),
    };
    let msg = format!("{err}");
    assert!(msg.contains("GET"));
    assert!(msg.contains("404"));
    assert!(msg.contains("no such node"));
}

#[test]
fn error_display_validation_is_transparent() {
    let err: ClientError = ValidationError::PathLeadingSlash("a".into()).into();
    assert_eq!(format!("{err}"), "bosk node paths must start with a slash, got: a");
}

#[test]
fn status_and_not_found() {
    let err = ClientError::Remote {
        method: "DELETE",
        status: 404,
        body: String::new(),
    };
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());
    assert_eq!(ClientError::Transport("x".into()).status(), None);
    assert!(!ClientError::Transport("x".into()).is_not_found());
}

#[test]
fn errors_become_error_diagnostics() {
    let diag: Diagnostic = ClientError::Transport("timed out".into()).into();
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.summary, "Client Error");

    let diag = Diagnostic::from(&ClientError::Configuration("x".into()));
    assert_eq!(diag.summary, "Configuration Error");

    let diag: Diagnostic = ClientError::from(ValidationError::UrlScheme("ftp://x".into())).into();
    assert_eq!(diag.summary, "URL must be http or https");
}

#[test]
fn error_is_debug() {
    let err = ClientError::Transport("test".into());
    let _ = format!("{err:?}");
}
