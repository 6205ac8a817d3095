use crate::endpoints::{self, CSRF_HEADER};
use crate::{ClientError, CsrfTokenManager, Navigator, Result as ClientResult, TokenKind, TokenStore};

use lp_auth::LandingRoutes;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde_json::Value;

/// Error code the server uses for anti-forgery rejections
const CSRF_REJECTION_CODE: &str = "EBADCSRFTOKEN";

/// Credentials captured from the token store at dispatch time.
///
/// Each dispatch reads the store exactly once into this snapshot, so
/// header attachment never observes a store mutated mid-request.
struct CredentialSnapshot {
    bearer: Option<String>,
    csrf: Option<String>,
}

/// HTTP client wrapping every backend call in the credential pipeline.
///
/// Request stage: public allow-list skip, bearer attachment, anti-forgery
/// attachment on mutating verbs. Response stage: at most one anti-forgery
/// retry, session-expiry teardown on 401. Every other failure propagates
/// unchanged to the caller.
pub struct ApiClient {
    base_url: String,
    http: ReqwestClient,
    store: Arc<dyn TokenStore>,
    csrf: CsrfTokenManager,
    navigator: Arc<dyn Navigator>,
    routes: LandingRoutes,
}

impl ApiClient {
    /// The timeout bounds every dispatch, anti-forgery issuance included;
    /// a hung backend surfaces as `ClientError::Http` instead of stalling
    /// the shell.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        routes: LandingRoutes,
    ) -> ClientResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = ReqwestClient::builder().timeout(timeout).build()?;
        let csrf = CsrfTokenManager::new(&base_url, http.clone(), Arc::clone(&store));

        Ok(Self {
            base_url,
            http,
            store,
            csrf,
            navigator,
            routes,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn csrf(&self) -> &CsrfTokenManager {
        &self.csrf
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    pub async fn get(&self, path: &str) -> ClientResult<Value> {
        self.send(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> ClientResult<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> ClientResult<Value> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<Value> {
        self.send(Method::DELETE, path, None).await
    }

    /// Run one logical request through the pipeline.
    pub async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> ClientResult<Value> {
        let public = endpoints::is_public_path(path);
        // Scoped to this logical request; set before the resubmission, so
        // at most one retry can ever be in flight.
        let mut retried = false;

        loop {
            let credentials = self.request_credentials(public, &method).await;
            let response = self.dispatch(&method, path, body, &credentials).await?;
            let status = response.status();

            if status.is_success() {
                if status == StatusCode::NO_CONTENT {
                    return Ok(Value::Null);
                }
                return response.json().await.map_err(ClientError::from);
            }

            // Error bodies may be empty or non-JSON; classification degrades
            let payload: Value = response.json().await.unwrap_or(Value::Null);

            if status == StatusCode::FORBIDDEN && !retried && Self::is_csrf_rejection(&payload) {
                debug!("anti-forgery rejection on {} {}, retrying once", method, path);
                retried = true;
                self.csrf.refresh().await?;
                continue;
            }

            if status == StatusCode::UNAUTHORIZED && !retried && !public {
                self.expire_session();
                return Err(ClientError::session_expired());
            }

            return Err(Self::api_error(status.as_u16(), &payload));
        }
    }

    /// Request-stage header snapshot. Public endpoints carry no credentials.
    /// A failed anti-forgery ensure degrades to a bare request; the server
    /// rejection then flows through the response stage.
    async fn request_credentials(&self, public: bool, method: &Method) -> CredentialSnapshot {
        if public {
            return CredentialSnapshot {
                bearer: None,
                csrf: None,
            };
        }

        let bearer = self.store.get(TokenKind::Access);
        let csrf = if endpoints::is_mutating(method) {
            match self.csrf.ensure().await {
                Ok(token) => Some(token),
                Err(e) => {
                    warn!("proceeding without anti-forgery token: {}", e);
                    None
                }
            }
        } else {
            None
        };

        CredentialSnapshot { bearer, csrf }
    }

    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        body: Option<&Value>,
        credentials: &CredentialSnapshot,
    ) -> ClientResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);

        if let Some(ref bearer) = credentials.bearer {
            request = request.bearer_auth(bearer);
        }
        if let Some(ref csrf) = credentials.csrf {
            request = request.header(CSRF_HEADER, csrf);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    /// 403 carrying the anti-forgery signature: the dedicated error code,
    /// or "csrf" (case-insensitive) in an error/message field.
    fn is_csrf_rejection(payload: &Value) -> bool {
        fn mentions_csrf(value: Option<&Value>) -> bool {
            value
                .and_then(Value::as_str)
                .is_some_and(|text| text.to_ascii_lowercase().contains("csrf"))
        }

        let error = payload.get("error");
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(Value::as_str)
            .or_else(|| payload.get("code").and_then(Value::as_str));

        code == Some(CSRF_REJECTION_CODE)
            || mentions_csrf(payload.get("message"))
            || mentions_csrf(error.and_then(|e| e.get("message")))
            || mentions_csrf(error)
    }

    /// Terminal authentication failure: drop every credential and send the
    /// shell to the login view with a machine-readable reason, unless it is
    /// already there.
    fn expire_session(&self) {
        self.store.clear_all();
        warn!("session expired; credentials cleared");

        if !self.navigator.current_path().starts_with(&self.routes.login) {
            self.navigator.navigate(&self.routes.login_expired());
        }
    }

    #[track_caller]
    fn api_error(status: u16, payload: &Value) -> ClientError {
        let error = payload.get("error").unwrap_or(payload);
        let code = error
            .get("code")
            .and_then(Value::as_str)
            .unwrap_or("UNKNOWN");
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");

        ClientError::api(status, code, message)
    }
}
