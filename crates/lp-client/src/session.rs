use crate::{
    ApiClient, ClientError, Navigator, Result as ClientResult, TokenKind, TokenPair, TokenStore,
};

use lp_auth::{ClaimsDecoder, LandingRoutes, SessionSnapshot, SessionStatus};

use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};

/// The session state machine (Anonymous / Resolving / Authenticated).
///
/// One instance per application shell, constructor-injected into every
/// component that needs it. All mutation goes through `resolve`, `login`,
/// and `logout`; the derived snapshot is swapped wholesale under a single
/// write lock, so a reader can never mix old roles with a new tenant scope.
pub struct SessionService {
    api: Arc<ApiClient>,
    store: Arc<dyn TokenStore>,
    decoder: ClaimsDecoder,
    navigator: Arc<dyn Navigator>,
    routes: LandingRoutes,
    state: RwLock<SessionStatus>,
}

impl SessionService {
    pub fn new(
        api: Arc<ApiClient>,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        routes: LandingRoutes,
    ) -> Self {
        Self {
            api,
            store,
            decoder: ClaimsDecoder::new(),
            navigator,
            routes,
            state: RwLock::new(SessionStatus::Anonymous),
        }
    }

    /// Current machine state.
    ///
    /// An Authenticated snapshot is cross-checked against the store, so a
    /// credential teardown performed by the pipeline (session expiry on a
    /// 401) is observed here as Anonymous, not just by `is_authenticated`.
    pub fn status(&self) -> SessionStatus {
        let current = self
            .state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        if matches!(current, SessionStatus::Authenticated(_))
            && self.store.get(TokenKind::Access).is_none()
        {
            self.set_state(SessionStatus::Anonymous);
            return SessionStatus::Anonymous;
        }

        current
    }

    /// Restore a persisted session at startup.
    ///
    /// A malformed stored token triggers an implicit local logout.
    pub fn resolve(&self) {
        let Some(token) = self.store.get(TokenKind::Access) else {
            self.set_state(SessionStatus::Anonymous);
            return;
        };

        self.set_state(SessionStatus::Resolving);
        match self.decoder.decode(&token) {
            Ok(claims) => {
                self.set_state(SessionStatus::Authenticated(SessionSnapshot::from_claims(
                    claims,
                )));
            }
            Err(e) => {
                warn!("stored access token is malformed, discarding session: {}", e);
                self.clear_local();
            }
        }
    }

    /// Accept a freshly minted token pair and transition to Authenticated.
    ///
    /// Navigates to the role-appropriate landing and, when called inside a
    /// Tokio runtime, warms the anti-forgery token without blocking the
    /// transition. A warm-up failure (or the absence of a runtime) is not
    /// an error; the next mutating call fetches the token instead.
    pub fn login(&self, tokens: &TokenPair) -> ClientResult<()> {
        self.store.set(TokenKind::Access, &tokens.access_token);
        self.store.set(TokenKind::Refresh, &tokens.refresh_token);

        let claims = match self.decoder.decode(&tokens.access_token) {
            Ok(claims) => claims,
            Err(e) => {
                // Malformed token during a transition implies logout
                self.clear_local();
                return Err(ClientError::from_auth(e));
            }
        };

        let snapshot = SessionSnapshot::from_claims(claims);
        let landing = self.routes.landing_for(snapshot.is_super_admin).to_string();
        info!("session established for {}", snapshot.subject_id);
        self.set_state(SessionStatus::Authenticated(snapshot));

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let csrf = self.api.csrf().clone();
                handle.spawn(async move {
                    if let Err(e) = csrf.ensure().await {
                        warn!("anti-forgery warm-up failed: {}", e);
                    }
                });
            }
            Err(_) => debug!("no async runtime active, skipping anti-forgery warm-up"),
        }

        self.navigator.navigate(&landing);
        Ok(())
    }

    /// Credential sign-in: exchange against the login endpoint, then `login`.
    pub async fn sign_in(&self, username: &str, password: &str) -> ClientResult<()> {
        let tokens = self.api.login(username, password).await?;
        self.login(&tokens)
    }

    /// Tear the session down and navigate to the entry view.
    ///
    /// Idempotent: a second call finds an anonymous session and performs no
    /// further network traffic or navigation.
    pub async fn logout(&self) {
        if self.status().is_anonymous() {
            return;
        }

        if let Err(e) = self.api.logout_remote().await {
            // Local teardown proceeds regardless; the server session lapses on its own
            warn!("server-side logout failed: {}", e);
        }

        self.clear_local();
        self.navigator.navigate(&self.routes.login);
    }

    /// On-demand, side-effect-free check: authenticated iff the stored
    /// access token decodes and expires strictly in the future.
    pub fn is_authenticated(&self) -> bool {
        let Some(token) = self.store.get(TokenKind::Access) else {
            return false;
        };

        match self.decoder.decode(&token) {
            Ok(claims) => claims.exp > Self::now(),
            Err(_) => false,
        }
    }

    fn clear_local(&self) {
        self.store.clear_all();
        self.set_state(SessionStatus::Anonymous);
    }

    fn set_state(&self, next: SessionStatus) {
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = next;
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}
