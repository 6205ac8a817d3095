pub mod claims;
pub mod claims_decoder;
pub mod error;
pub mod guards;
pub mod role_assignment;
pub mod role_set;
pub mod session_snapshot;
pub mod session_status;
pub mod tenant_scope;

pub use claims::AccessClaims;
pub use claims_decoder::ClaimsDecoder;
pub use error::{AuthError, Result};
pub use guards::{
    GuardOutcome, LandingRoutes, SESSION_EXPIRED_REASON, require_authenticated, require_financial,
    require_roles,
};
pub use role_assignment::{ADMIN_ROLE, AdminScope, RoleAssignment};
pub use role_set::RoleSet;
pub use session_snapshot::SessionSnapshot;
pub use session_status::SessionStatus;
pub use tenant_scope::TenantScope;

#[cfg(test)]
mod tests;
