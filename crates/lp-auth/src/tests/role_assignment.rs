use crate::{AdminScope, AuthError, RoleAssignment};

fn admin_assignment() -> RoleAssignment {
    RoleAssignment {
        principal_role: "admin".to_string(),
        additional_roles: vec!["medico".to_string()],
        admin_scopes: vec![AdminScope {
            tenant_id: "t1".to_string(),
            scope: "full".to_string(),
        }],
    }
}

#[test]
fn given_valid_assignment_when_validated_then_ok() {
    assert!(admin_assignment().validate().is_ok());
}

#[test]
fn given_additional_repeats_principal_when_validated_then_error() {
    let mut assignment = admin_assignment();
    assignment.additional_roles.push("admin".to_string());

    let result = assignment.validate();

    assert!(matches!(result, Err(AuthError::InvalidAssignment { .. })));
}

#[test]
fn given_admin_scopes_without_admin_role_when_validated_then_error() {
    let assignment = RoleAssignment {
        principal_role: "medico".to_string(),
        additional_roles: vec![],
        admin_scopes: vec![AdminScope {
            tenant_id: "t1".to_string(),
            scope: "full".to_string(),
        }],
    };

    let result = assignment.validate();

    assert!(matches!(result, Err(AuthError::InvalidAssignment { .. })));
}

#[test]
fn given_assignment_when_effective_roles_then_deduplicated_union() {
    let assignment = admin_assignment();

    let roles = assignment.effective_roles();

    assert_eq!(roles.len(), 2);
    assert!(roles.has_role("admin"));
    assert!(roles.has_role("medico"));
}

#[test]
fn given_tenant_when_admin_scope_looked_up_then_matching_pair() {
    let assignment = admin_assignment();

    assert_eq!(assignment.admin_scope_for("t1").map(|s| s.scope.as_str()), Some("full"));
    assert!(assignment.admin_scope_for("t2").is_none());
}
