use crate::SessionStatus;

/// Reason code appended to the login path when a session lapses
pub const SESSION_EXPIRED_REASON: &str = "session_expired";

/// Decision produced by a navigation guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    /// Session resolution still pending; render a placeholder, never redirect
    Pending,
    Redirect(String),
}

/// Landing targets used by guard and pipeline redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingRoutes {
    pub login: String,
    pub dashboard: String,
    pub super_admin: String,
}

impl Default for LandingRoutes {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            dashboard: "/dashboard".to_string(),
            super_admin: "/admin".to_string(),
        }
    }
}

impl LandingRoutes {
    /// Login entry annotated with a machine-readable expiry reason
    pub fn login_expired(&self) -> String {
        format!("{}?error={}", self.login, SESSION_EXPIRED_REASON)
    }

    /// Landing view after a successful login, by identity class
    pub fn landing_for(&self, is_super_admin: bool) -> &str {
        if is_super_admin {
            &self.super_admin
        } else {
            &self.dashboard
        }
    }
}

/// Gate for views any signed-in user may reach.
pub fn require_authenticated(
    status: &SessionStatus,
    now: i64,
    routes: &LandingRoutes,
) -> GuardOutcome {
    match status {
        SessionStatus::Resolving => GuardOutcome::Pending,
        SessionStatus::Anonymous => GuardOutcome::Redirect(routes.login.clone()),
        SessionStatus::Authenticated(snapshot) => {
            if snapshot.is_live_at(now) {
                GuardOutcome::Allow
            } else {
                GuardOutcome::Redirect(routes.login_expired())
            }
        }
    }
}

/// Gate for role-restricted views.
///
/// Superuser identity overrides the requested roles: a super admin outside
/// the super-admin section is always sent to its landing first, regardless
/// of what the view asked for.
pub fn require_roles(
    status: &SessionStatus,
    current_path: &str,
    required: &[&str],
    now: i64,
    routes: &LandingRoutes,
) -> GuardOutcome {
    let outcome = require_authenticated(status, now, routes);
    if outcome != GuardOutcome::Allow {
        return outcome;
    }
    let Some(snapshot) = status.snapshot() else {
        return GuardOutcome::Redirect(routes.login.clone());
    };

    if snapshot.is_super_admin {
        if !current_path.starts_with(&routes.super_admin) {
            return GuardOutcome::Redirect(routes.super_admin.clone());
        }
        return GuardOutcome::Allow;
    }

    if snapshot.roles.has_any_role(required) {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(routes.dashboard.clone())
    }
}

/// Gate for the financial module. Superusers bypass the permission flag.
pub fn require_financial(status: &SessionStatus, now: i64, routes: &LandingRoutes) -> GuardOutcome {
    let outcome = require_authenticated(status, now, routes);
    if outcome != GuardOutcome::Allow {
        return outcome;
    }
    let Some(snapshot) = status.snapshot() else {
        return GuardOutcome::Redirect(routes.login.clone());
    };

    if snapshot.is_super_admin || snapshot.financial_permission {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(routes.dashboard.clone())
    }
}
