use crate::endpoints::{LOGIN_PATH, LOGOUT_PATH};
use crate::{ApiClient, Result as ClientResult};

use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Credential exchange payload for the login endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Token pair minted by a successful login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl ApiClient {
    /// Exchange credentials for an access/refresh token pair.
    ///
    /// Public path: no bearer or anti-forgery headers are attached.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<TokenPair> {
        let body = serde_json::to_value(LoginRequest { username, password })?;
        let payload = self.post(LOGIN_PATH, &body).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Server-side session invalidation. Public path; the local teardown is
    /// the session service's job.
    pub async fn logout_remote(&self) -> ClientResult<()> {
        self.send(Method::POST, LOGOUT_PATH, None).await.map(|_| ())
    }
}
