use serde::{Deserialize, Serialize};

/// Tenant reach of an access token: absent, one tenant, or several.
///
/// The wire value is `null`, a single string, or an array of strings; the
/// untagged representation accepts all three.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TenantScope {
    #[default]
    None,
    Single(String),
    Many(Vec<String>),
}

impl TenantScope {
    pub fn includes(&self, tenant_id: &str) -> bool {
        match self {
            Self::None => false,
            Self::Single(id) => id == tenant_id,
            Self::Many(ids) => ids.iter().any(|id| id == tenant_id),
        }
    }

    /// First tenant in scope, if any. Drives tenant-scoped landing views.
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Single(id) => Some(id.as_str()),
            Self::Many(ids) => ids.first().map(String::as_str),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None) || matches!(self, Self::Many(ids) if ids.is_empty())
    }
}
