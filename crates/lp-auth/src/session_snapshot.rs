use crate::{AccessClaims, RoleSet, TenantScope};

/// Immutable projection of the access token claims.
///
/// Rebuilt wholesale on every login or token replacement and never patched
/// in place, so a reader can never observe old roles mixed with a new
/// tenant scope.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub subject_id: String,
    pub tenant_scope: TenantScope,
    pub is_super_admin: bool,
    pub financial_permission: bool,
    pub principal_role: String,
    pub roles: RoleSet,
    /// Expiration timestamp (Unix seconds)
    pub expires_at: i64,
}

impl SessionSnapshot {
    pub fn from_claims(claims: AccessClaims) -> Self {
        let roles = RoleSet::from_roles(claims.all_roles);
        Self {
            subject_id: claims.sub,
            tenant_scope: claims.tenant_id,
            is_super_admin: claims.is_super_admin,
            financial_permission: claims.financial_permission,
            principal_role: claims.principal_role,
            roles,
            expires_at: claims.exp,
        }
    }

    /// Strictly-future expiry: a token expiring exactly at `now` is dead.
    pub fn is_live_at(&self, now: i64) -> bool {
        self.expires_at > now
    }
}
