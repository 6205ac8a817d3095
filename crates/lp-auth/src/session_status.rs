use crate::SessionSnapshot;

/// Session state machine as observed by guards and views.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionStatus {
    #[default]
    Anonymous,
    /// A stored token exists but has not been decoded yet (startup)
    Resolving,
    Authenticated(SessionSnapshot),
}

impl SessionStatus {
    pub fn snapshot(&self) -> Option<&SessionSnapshot> {
        match self {
            Self::Authenticated(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}
