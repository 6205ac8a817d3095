use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure classes surfaced by the credential pipeline.
///
/// The pipeline resolves anti-forgery rejections (one retry) and session
/// expiry (clear + redirect) internally; every other failure is opaque to
/// the core and propagated unchanged for the calling view to render.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP transport error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error {status}: {message} (code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Session expired {location}")]
    SessionExpired { location: ErrorLocation },

    #[error("Token decode error: {source} {location}")]
    Token {
        #[source]
        source: lp_auth::AuthError,
        location: ErrorLocation,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api<S: Into<String>>(status: u16, code: &str, message: S) -> Self {
        ClientError::Api {
            status,
            code: code.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Terminal authentication failure
    #[track_caller]
    pub fn session_expired() -> Self {
        ClientError::SessionExpired {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a claim decode failure
    #[track_caller]
    pub fn from_auth(err: lp_auth::AuthError) -> Self {
        ClientError::Token {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
