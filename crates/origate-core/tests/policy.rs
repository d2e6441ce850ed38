//! Cross-origin policy record tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use origate_core::CorsPolicy;

#[test]
fn defaults_match_production_policy() {
    let p = CorsPolicy::default();
    assert_eq!(
        p.methods,
        ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS", "HEAD"]
    );
    assert_eq!(p.allowed_headers, ["*"]);
    assert_eq!(p.exposed_headers, ["*"]);
    assert!(p.credentials);
    assert_eq!(p.max_age_secs, 86400);
    assert_eq!(p.preflight_status, 204);
    assert!(p.terminate_preflight);
    p.validate().unwrap();
}

#[test]
fn header_values_are_comma_joined() {
    let p = CorsPolicy::default();
    assert_eq!(
        p.methods_header(),
        "GET, POST, PUT, DELETE, PATCH, OPTIONS, HEAD"
    );
    assert_eq!(p.allowed_headers_header(), "*");
    assert_eq!(p.exposed_headers_header().as_deref(), Some("*"));

    let mut p = CorsPolicy::default();
    p.exposed_headers.clear();
    assert_eq!(p.exposed_headers_header(), None);
}

#[test]
fn validate_rejects_empty_methods() {
    let mut p = CorsPolicy::default();
    p.methods.clear();
    assert!(p.validate().is_err());
}

#[test]
fn validate_rejects_lowercase_method_tokens() {
    let mut p = CorsPolicy::default();
    p.methods = vec!["get".to_string()];
    assert!(p.validate().is_err());
}

#[test]
fn validate_rejects_non_2xx_preflight_status() {
    let mut p = CorsPolicy::default();
    p.preflight_status = 404;
    assert!(p.validate().is_err());
}
