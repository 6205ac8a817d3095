use crate::endpoints::CSRF_TOKEN_PATH;
use crate::{ClientError, Result as ClientResult, TokenKind, TokenStore};

use std::sync::Arc;

use log::debug;
use serde::Deserialize;
use tokio::sync::Mutex;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsrfTokenResponse {
    csrf_token: String,
}

/// Fetch-or-reuse manager for the anti-forgery token.
///
/// `ensure` is single-flight: concurrent callers that miss the store wait
/// on the in-flight latch and re-check the store instead of racing the
/// issuance endpoint. Fetch failures propagate unchanged; there is no
/// retry at this layer.
#[derive(Clone)]
pub struct CsrfTokenManager {
    inner: Arc<Inner>,
}

struct Inner {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn TokenStore>,
    in_flight: Mutex<()>,
}

impl CsrfTokenManager {
    pub fn new(base_url: &str, http: reqwest::Client, store: Arc<dyn TokenStore>) -> Self {
        Self {
            inner: Arc::new(Inner {
                base_url: base_url.trim_end_matches('/').to_string(),
                http,
                store,
                in_flight: Mutex::new(()),
            }),
        }
    }

    /// Return the stored token, fetching one first if the store is empty.
    pub async fn ensure(&self) -> ClientResult<String> {
        if let Some(token) = self.inner.store.get(TokenKind::Csrf) {
            return Ok(token);
        }

        let _guard = self.inner.in_flight.lock().await;
        // A concurrent caller may have finished the fetch while we waited
        if let Some(token) = self.inner.store.get(TokenKind::Csrf) {
            return Ok(token);
        }

        self.fetch_and_store().await
    }

    /// Discard the stored token and fetch a fresh one.
    pub async fn refresh(&self) -> ClientResult<String> {
        self.inner.store.clear(TokenKind::Csrf);

        let _guard = self.inner.in_flight.lock().await;
        if let Some(token) = self.inner.store.get(TokenKind::Csrf) {
            return Ok(token);
        }

        self.fetch_and_store().await
    }

    async fn fetch_and_store(&self) -> ClientResult<String> {
        let url = format!("{}{}", self.inner.base_url, CSRF_TOKEN_PATH);
        let response = self.inner.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::api(
                status.as_u16(),
                "CSRF_ISSUE_FAILED",
                format!("anti-forgery token issuance returned {}", status),
            ));
        }

        let body: CsrfTokenResponse = response.json().await?;
        self.inner.store.set(TokenKind::Csrf, &body.csrf_token);
        debug!("anti-forgery token stored");

        Ok(body.csrf_token)
    }
}
