use crate::{AuthError, Result as AuthErrorResult, RoleSet};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role that admin scopes are bound to
pub const ADMIN_ROLE: &str = "admin";

/// Restriction binding an admin-capable role to one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminScope {
    pub tenant_id: String,
    pub scope: String,
}

/// Server-modeled role assignment as consumed by tenant administration
/// screens. The server is authoritative; `validate` only sanity-checks
/// payloads before they feed tenant-scoped views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub principal_role: String,
    #[serde(default)]
    pub additional_roles: Vec<String>,
    #[serde(default)]
    pub admin_scopes: Vec<AdminScope>,
}

impl RoleAssignment {
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.principal_role.is_empty() {
            return Err(AuthError::InvalidAssignment {
                message: "principal role cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.additional_roles.iter().any(|r| r == &self.principal_role) {
            return Err(AuthError::InvalidAssignment {
                message: "additional roles must not repeat the principal role".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.admin_scopes.is_empty() && !self.effective_roles().has_role(ADMIN_ROLE) {
            return Err(AuthError::InvalidAssignment {
                message: format!("admin scopes require the '{}' role", ADMIN_ROLE),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Deduplicated union of principal and additional roles; this is the
    /// effective role set for authorization purposes.
    pub fn effective_roles(&self) -> RoleSet {
        let mut roles = RoleSet::from_roles([self.principal_role.clone()]);
        for role in &self.additional_roles {
            roles.insert(role.clone());
        }
        roles
    }

    pub fn admin_scope_for(&self, tenant_id: &str) -> Option<&AdminScope> {
        self.admin_scopes.iter().find(|s| s.tenant_id == tenant_id)
    }
}
