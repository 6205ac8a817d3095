#![allow(dead_code)]

use lp_auth::{AccessClaims, LandingRoutes, TenantScope};
use lp_client::{
    ApiClient, MemoryTokenStore, Navigator, RecordingNavigator, SessionService, TokenStore,
};

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

pub struct TestHarness {
    pub api: Arc<ApiClient>,
    pub store: Arc<MemoryTokenStore>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Wire an ApiClient against a mock server, with an in-memory store and a
/// recording navigator starting on the dashboard.
pub fn harness(base_url: &str) -> TestHarness {
    harness_with_timeout(base_url, Duration::from_secs(30))
}

pub fn harness_with_timeout(base_url: &str, timeout: Duration) -> TestHarness {
    let store = Arc::new(MemoryTokenStore::new());
    let navigator = Arc::new(RecordingNavigator::starting_at("/dashboard"));

    let store_dyn: Arc<dyn TokenStore> = store.clone();
    let navigator_dyn: Arc<dyn Navigator> = navigator.clone();
    let api = Arc::new(
        ApiClient::new(
            base_url,
            timeout,
            store_dyn,
            navigator_dyn,
            LandingRoutes::default(),
        )
        .unwrap(),
    );

    TestHarness {
        api,
        store,
        navigator,
    }
}

pub fn session_service(harness: &TestHarness) -> SessionService {
    let store_dyn: Arc<dyn TokenStore> = harness.store.clone();
    let navigator_dyn: Arc<dyn Navigator> = harness.navigator.clone();
    SessionService::new(
        Arc::clone(&harness.api),
        store_dyn,
        navigator_dyn,
        LandingRoutes::default(),
    )
}

/// Mint a signed access token. The client never checks the signature, so
/// any secret works.
pub fn mint_token(principal: &str, roles: &[&str], is_super_admin: bool, exp: i64) -> String {
    let claims = AccessClaims {
        sub: "user-123".to_string(),
        tenant_id: TenantScope::Single("t1".to_string()),
        exp,
        is_super_admin,
        financial_permission: false,
        principal_role: principal.to_string(),
        all_roles: roles.iter().map(|r| r.to_string()).collect(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap()
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
