use crate::{AuthError, Result as AuthErrorResult, TenantScope};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Claims carried by the platform access token.
///
/// Decoded client-side without signature verification; the values drive
/// navigation and screen gating only. The server re-checks every claim on
/// every call, so nothing here is a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessClaims {
    /// Subject (user id)
    pub sub: String,
    /// Tenant(s) the token is scoped to
    #[serde(default)]
    pub tenant_id: TenantScope,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
    #[serde(default)]
    pub is_super_admin: bool,
    /// Financial module permission flag
    #[serde(default)]
    pub financial_permission: bool,
    /// The user's single primary role
    pub principal_role: String,
    /// Every role the user holds, principal included
    #[serde(default)]
    pub all_roles: Vec<String>,
}

impl AccessClaims {
    /// Validate claims after decoding
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.principal_role.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "principalRole".to_string(),
                message: "principalRole cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Enforce the role-set invariant: `all_roles` contains the principal
    /// role and holds no duplicates. Order is preserved otherwise.
    pub fn normalize(&mut self) {
        if !self.all_roles.iter().any(|r| r == &self.principal_role) {
            self.all_roles.insert(0, self.principal_role.clone());
        }

        let mut seen: Vec<String> = Vec::with_capacity(self.all_roles.len());
        self.all_roles.retain(|role| {
            if seen.contains(role) {
                false
            } else {
                seen.push(role.clone());
                true
            }
        });
    }
}
