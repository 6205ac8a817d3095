use super::medico_claims;
use crate::{
    GuardOutcome, LandingRoutes, SessionSnapshot, SessionStatus, require_authenticated,
    require_financial, require_roles,
};

const NOW: i64 = 1_700_000_000;

fn authenticated(is_super_admin: bool) -> SessionStatus {
    let mut claims = medico_claims();
    claims.is_super_admin = is_super_admin;
    claims.exp = NOW + 3600;
    claims.normalize();
    SessionStatus::Authenticated(SessionSnapshot::from_claims(claims))
}

fn routes() -> LandingRoutes {
    LandingRoutes::default()
}

#[test]
fn given_resolving_session_when_authenticated_guard_then_pending() {
    let outcome = require_authenticated(&SessionStatus::Resolving, NOW, &routes());

    assert_eq!(outcome, GuardOutcome::Pending);
}

#[test]
fn given_anonymous_session_when_authenticated_guard_then_redirect_to_login() {
    let outcome = require_authenticated(&SessionStatus::Anonymous, NOW, &routes());

    assert_eq!(outcome, GuardOutcome::Redirect("/login".to_string()));
}

#[test]
fn given_live_session_when_authenticated_guard_then_allow() {
    let outcome = require_authenticated(&authenticated(false), NOW, &routes());

    assert_eq!(outcome, GuardOutcome::Allow);
}

#[test]
fn given_token_expiring_exactly_now_when_authenticated_guard_then_redirect_with_reason() {
    // Boundary: exp == now means not authenticated
    let outcome = require_authenticated(&authenticated(false), NOW + 3600, &routes());

    assert_eq!(
        outcome,
        GuardOutcome::Redirect("/login?error=session_expired".to_string())
    );
}

#[test]
fn given_super_admin_on_dashboard_when_role_guard_then_forced_into_admin_section() {
    let outcome = require_roles(
        &authenticated(true),
        "/dashboard",
        &["medico"],
        NOW,
        &routes(),
    );

    assert_eq!(outcome, GuardOutcome::Redirect("/admin".to_string()));
}

#[test]
fn given_super_admin_inside_admin_section_when_role_guard_then_allow() {
    // Superuser identity overrides required roles entirely
    let outcome = require_roles(
        &authenticated(true),
        "/admin/tenants",
        &["some-role-nobody-has"],
        NOW,
        &routes(),
    );

    assert_eq!(outcome, GuardOutcome::Allow);
}

#[test]
fn given_medico_on_laudos_when_role_guard_requires_medico_or_admin_then_allow() {
    let outcome = require_roles(
        &authenticated(false),
        "/laudos",
        &["medico", "admin"],
        NOW,
        &routes(),
    );

    assert_eq!(outcome, GuardOutcome::Allow);
}

#[test]
fn given_medico_on_usuarios_when_role_guard_requires_admin_then_redirect_to_dashboard() {
    let outcome = require_roles(
        &authenticated(false),
        "/usuarios",
        &["admin"],
        NOW,
        &routes(),
    );

    assert_eq!(outcome, GuardOutcome::Redirect("/dashboard".to_string()));
}

#[test]
fn given_anonymous_when_role_guard_then_redirect_to_login() {
    let outcome = require_roles(&SessionStatus::Anonymous, "/laudos", &["medico"], NOW, &routes());

    assert_eq!(outcome, GuardOutcome::Redirect("/login".to_string()));
}

#[test]
fn given_no_financial_permission_when_financial_guard_then_redirect_to_dashboard() {
    let outcome = require_financial(&authenticated(false), NOW, &routes());

    assert_eq!(outcome, GuardOutcome::Redirect("/dashboard".to_string()));
}

#[test]
fn given_financial_permission_when_financial_guard_then_allow() {
    let mut claims = medico_claims();
    claims.financial_permission = true;
    claims.exp = NOW + 3600;
    let status = SessionStatus::Authenticated(SessionSnapshot::from_claims(claims));

    let outcome = require_financial(&status, NOW, &routes());

    assert_eq!(outcome, GuardOutcome::Allow);
}

#[test]
fn given_super_admin_without_financial_flag_when_financial_guard_then_allow() {
    let outcome = require_financial(&authenticated(true), NOW, &routes());

    assert_eq!(outcome, GuardOutcome::Allow);
}
