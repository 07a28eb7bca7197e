use std::time::Duration;

use ideavault_lib::core::{config::BackendConfig, errors::AppError, types::ContentKind};

#[test]
fn base_url_is_trimmed_and_joined_with_kind_paths() {
    let config = BackendConfig::new(" https://api.example.com/ ").expect("valid url");

    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(
        config.endpoint(ContentKind::Note),
        "https://api.example.com/api/v1/notes"
    );
    assert_eq!(
        config.endpoint(ContentKind::Document),
        "https://api.example.com/api/v1/documents"
    );
    assert_eq!(
        config.endpoint(ContentKind::Link),
        "https://api.example.com/api/v1/link"
    );
}

#[test]
fn empty_or_malformed_base_url_is_a_config_error() {
    assert!(matches!(BackendConfig::new("  "), Err(AppError::Config(_))));
    assert!(matches!(BackendConfig::new("not a url"), Err(AppError::Config(_))));
}

#[test]
fn optional_parts_are_parsed() {
    let config = BackendConfig::from_parts(
        "http://localhost:8080",
        Some("session=xyz".to_string()),
        Some("30".to_string()),
    )
    .expect("valid parts");

    assert_eq!(config.session_cookie.as_deref(), Some("session=xyz"));
    assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
}

#[test]
fn no_timeout_unless_configured() {
    let config = BackendConfig::from_parts("http://localhost:8080", Some(" ".to_string()), None)
        .expect("valid parts");

    assert_eq!(config.session_cookie, None);
    assert_eq!(config.request_timeout, None);
}

#[test]
fn bad_timeout_is_rejected() {
    let err = BackendConfig::from_parts("http://localhost:8080", None, Some("soon".to_string()))
        .expect_err("non-numeric timeout");
    assert_eq!(err.code(), "CONFIG_ERROR");
}

#[test]
fn app_errors_serialize_as_code_and_message() {
    let missing = AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "absent.pdf"));
    assert_eq!(missing.code(), "NOT_FOUND");

    let json = serde_json::to_value(&missing).expect("error serializes");
    assert_eq!(
        json,
        serde_json::json!({"code": "NOT_FOUND", "message": "not found: absent.pdf"})
    );

    let denied = AppError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked"));
    assert_eq!(denied.code(), "IO_ERROR");
}

#[test]
fn from_env_reads_backend_settings() {
    std::env::set_var("IDEAVAULT_BACKEND_URL", "http://localhost:9000/");
    std::env::set_var("IDEAVAULT_TIMEOUT_SECS", "5");
    std::env::remove_var("IDEAVAULT_SESSION_COOKIE");

    let config = BackendConfig::from_env().expect("env config");

    assert_eq!(config.base_url, "http://localhost:9000");
    assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    assert_eq!(config.session_cookie, None);

    std::env::remove_var("IDEAVAULT_BACKEND_URL");
    assert!(matches!(BackendConfig::from_env(), Err(AppError::Config(_))));
    std::env::remove_var("IDEAVAULT_TIMEOUT_SECS");
}
