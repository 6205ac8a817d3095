use reqwest::Method;

/// Credential exchange: POST credentials, receive the token pair
pub const LOGIN_PATH: &str = "/auth/login";
/// Reserved. Silent refresh-token renewal is not wired into the 401 path.
pub const REFRESH_TOKEN_PATH: &str = "/auth/refresh-token";
/// Server-side session invalidation
pub const LOGOUT_PATH: &str = "/auth/logout";
/// Anti-forgery token issuance
pub const CSRF_TOKEN_PATH: &str = "/csrf-token";
/// Marker segment of unauthenticated public document views
pub const PUBLIC_DOCUMENT_MARKER: &str = "/publico/";

/// Header carrying the anti-forgery token on mutating calls
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// Paths that skip all credential attachment.
pub fn is_public_path(path: &str) -> bool {
    path == LOGIN_PATH
        || path == REFRESH_TOKEN_PATH
        || path == LOGOUT_PATH
        || path == CSRF_TOKEN_PATH
        || path.contains(PUBLIC_DOCUMENT_MARKER)
}

/// State-mutating verbs that must carry an anti-forgery token.
pub fn is_mutating(method: &Method) -> bool {
    *method == Method::POST
        || *method == Method::PUT
        || *method == Method::PATCH
        || *method == Method::DELETE
}
