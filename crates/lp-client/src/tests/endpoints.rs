use crate::endpoints::{is_mutating, is_public_path};

use reqwest::Method;

#[test]
fn given_auth_endpoints_when_checked_then_public() {
    assert!(is_public_path("/auth/login"));
    assert!(is_public_path("/auth/refresh-token"));
    assert!(is_public_path("/auth/logout"));
    assert!(is_public_path("/csrf-token"));
}

#[test]
fn given_public_document_path_when_checked_then_public() {
    assert!(is_public_path("/laudos/publico/abc-123"));
}

#[test]
fn given_business_paths_when_checked_then_protected() {
    assert!(!is_public_path("/laudos"));
    assert!(!is_public_path("/usuarios/42"));
    // Prefix of a public endpoint is not itself public
    assert!(!is_public_path("/auth/login/audit"));
}

#[test]
fn given_write_verbs_when_checked_then_mutating() {
    assert!(is_mutating(&Method::POST));
    assert!(is_mutating(&Method::PUT));
    assert!(is_mutating(&Method::PATCH));
    assert!(is_mutating(&Method::DELETE));
}

#[test]
fn given_read_verbs_when_checked_then_not_mutating() {
    assert!(!is_mutating(&Method::GET));
    assert!(!is_mutating(&Method::HEAD));
    assert!(!is_mutating(&Method::OPTIONS));
}
