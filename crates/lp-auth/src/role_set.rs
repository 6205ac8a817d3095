use serde::{Deserialize, Serialize};

/// Deduplicated, order-preserving collection of role names.
///
/// Role sets are tiny (a handful of entries), so linear scans beat hashing
/// here and keep insertion order stable for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(Vec<String>);

impl RoleSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for role in roles {
            set.insert(role.into());
        }
        set
    }

    /// Insert a role; duplicates are ignored
    pub fn insert(&mut self, role: String) {
        if !self.0.contains(&role) {
            self.0.push(role);
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.0.iter().any(|r| r == role)
    }

    /// True when at least one queried role is held. Empty query yields false.
    pub fn has_any_role<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        roles.iter().any(|r| self.has_role(r.as_ref()))
    }

    /// True when every queried role is held. Empty query yields true.
    pub fn has_all_roles<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        roles.iter().all(|r| self.has_role(r.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
