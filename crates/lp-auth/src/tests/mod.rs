mod claims;
mod guards;
mod role_assignment;

use crate::{AccessClaims, TenantScope};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Mint a signed test token. The decoder ignores the signature, so any
/// secret works here.
pub(crate) fn mint_token(claims: &AccessClaims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap()
}

pub(crate) fn medico_claims() -> AccessClaims {
    AccessClaims {
        sub: "user-123".to_string(),
        tenant_id: TenantScope::Single("t1".to_string()),
        exp: chrono::Utc::now().timestamp() + 3600,
        is_super_admin: false,
        financial_permission: false,
        principal_role: "medico".to_string(),
        all_roles: vec!["medico".to_string()],
    }
}
