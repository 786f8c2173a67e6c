//! Auth snapshot handed to views.

use crate::session::Session;
use crate::user::AuthUser;
use serde::{Deserialize, Serialize};

/// Who is signed in, if anyone.
///
/// Views receive this by value instead of reaching for global state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthContext {
    pub user: Option<AuthUser>,
}

impl AuthContext {
    /// Nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: AuthUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn from_session(session: Option<&Session>) -> Self {
        Self {
            user: session.map(|s| s.user.clone()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_context_from_session() {
        assert!(!AuthContext::from_session(None).is_authenticated());
        let ctx = AuthContext::signed_in(AuthUser::new(Uuid::nil(), "a@b.com"));
        assert!(ctx.is_authenticated());
    }
}
