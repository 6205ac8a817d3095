use super::{medico_claims, mint_token};
use crate::{AuthError, ClaimsDecoder, TenantScope};

#[test]
fn given_valid_token_when_decoded_then_returns_claims() {
    let decoder = ClaimsDecoder::new();
    let token = mint_token(&medico_claims());

    let claims = decoder.decode(&token).unwrap();

    assert_eq!(claims.sub, "user-123");
    assert_eq!(claims.principal_role, "medico");
    assert_eq!(claims.tenant_id, TenantScope::Single("t1".to_string()));
    assert!(!claims.is_super_admin);
}

#[test]
fn given_expired_token_when_decoded_then_still_returns_claims() {
    // Expiry is evaluated on demand by the session layer, not at decode time
    let decoder = ClaimsDecoder::new();
    let mut claims = medico_claims();
    claims.exp = chrono::Utc::now().timestamp() - 3600;
    let token = mint_token(&claims);

    let decoded = decoder.decode(&token).unwrap();

    assert_eq!(decoded.exp, claims.exp);
}

#[test]
fn given_garbage_when_decoded_then_claim_decode_error() {
    let decoder = ClaimsDecoder::new();

    let result = decoder.decode("not-a-token");

    assert!(matches!(result, Err(AuthError::ClaimDecode { .. })));
}

#[test]
fn given_empty_principal_role_when_decoded_then_invalid_claim_error() {
    let decoder = ClaimsDecoder::new();
    let mut claims = medico_claims();
    claims.principal_role = String::new();
    let token = mint_token(&claims);

    let result = decoder.decode(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}

#[test]
fn given_roles_missing_principal_when_decoded_then_principal_is_inserted() {
    let decoder = ClaimsDecoder::new();
    let mut claims = medico_claims();
    claims.all_roles = vec!["faturista".to_string()];
    let token = mint_token(&claims);

    let decoded = decoder.decode(&token).unwrap();

    assert_eq!(decoded.all_roles, vec!["medico", "faturista"]);
}

#[test]
fn given_duplicate_roles_when_decoded_then_deduplicated_in_order() {
    let decoder = ClaimsDecoder::new();
    let mut claims = medico_claims();
    claims.all_roles = vec![
        "medico".to_string(),
        "admin".to_string(),
        "medico".to_string(),
        "admin".to_string(),
    ];
    let token = mint_token(&claims);

    let decoded = decoder.decode(&token).unwrap();

    assert_eq!(decoded.all_roles, vec!["medico", "admin"]);
}

#[test]
fn given_tenant_array_when_decoded_then_many_scope() {
    let decoder = ClaimsDecoder::new();
    let mut claims = medico_claims();
    claims.tenant_id = TenantScope::Many(vec!["t1".to_string(), "t2".to_string()]);
    let token = mint_token(&claims);

    let decoded = decoder.decode(&token).unwrap();

    assert!(decoded.tenant_id.includes("t2"));
    assert!(!decoded.tenant_id.includes("t3"));
    assert_eq!(decoded.tenant_id.primary(), Some("t1"));
}

#[test]
fn given_null_tenant_when_decoded_then_empty_scope() {
    let decoder = ClaimsDecoder::new();
    let mut claims = medico_claims();
    claims.tenant_id = TenantScope::None;
    let token = mint_token(&claims);

    let decoded = decoder.decode(&token).unwrap();

    assert!(decoded.tenant_id.is_none());
    assert_eq!(decoded.tenant_id.primary(), None);
}
