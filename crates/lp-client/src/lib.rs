pub mod api_client;
pub mod auth_api;
pub mod csrf_manager;
pub mod endpoints;
pub mod error;
pub mod navigator;
pub mod session;
pub mod token_store;

pub use api_client::ApiClient;
pub use auth_api::{LoginRequest, TokenPair};
pub use csrf_manager::CsrfTokenManager;
pub use error::{ClientError, Result};
pub use navigator::{Navigator, RecordingNavigator};
pub use session::SessionService;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenKind, TokenStore};

#[cfg(test)]
mod tests;
