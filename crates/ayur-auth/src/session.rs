//! Session tokens.

use crate::user::AuthUser;
use crate::AuthError;
use serde::{Deserialize, Serialize};

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for store requests.
    pub access_token: String,
    /// Token used to obtain a fresh session.
    pub refresh_token: String,
    /// Unix timestamp when the access token expires.
    pub expires_at: i64,
    /// The signed-in user.
    pub user: AuthUser,
}

impl Session {
    /// Check if session is expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp())
    }

    /// Check expiry against a given Unix timestamp.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    /// Validate the session, returning error if expired.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.is_expired() {
            Err(AuthError::SessionExpired)
        } else {
            Ok(())
        }
    }

    /// Get time until expiration in seconds.
    pub fn time_to_expiry(&self) -> i64 {
        (self.expires_at - current_timestamp()).max(0)
    }
}

/// Token grant payload from the auth service.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl TokenResponse {
    /// Default lifetime when the service omits both expiry fields.
    const DEFAULT_EXPIRES_IN: i64 = 3600;

    pub fn into_session(self) -> Session {
        let expires_at = self.expires_at.unwrap_or_else(|| {
            current_timestamp() + self.expires_in.unwrap_or(Self::DEFAULT_EXPIRES_IN)
        });
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn session(expires_at: i64) -> Session {
        Session {
            access_token: "at".into(),
            refresh_token: "rt".into(),
            expires_at,
            user: AuthUser::new(Uuid::nil(), "a@b.com"),
        }
    }

    #[test]
    fn test_session_expiry() {
        let now = current_timestamp();
        assert!(!session(now + 60).is_expired());
        assert!(session(now - 1).is_expired());
        assert!(session(100).is_expired_at(100));
        assert!(session(now - 1).validate().is_err());
    }

    #[test]
    fn test_time_to_expiry_never_negative() {
        assert_eq!(session(0).time_to_expiry(), 0);
    }

    #[test]
    fn test_token_response_uses_expires_in() {
        let response: TokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "at",
            "token_type": "bearer",
            "refresh_token": "rt",
            "expires_in": 3600,
            "user": { "id": Uuid::nil(), "email": "a@b.com" },
        }))
        .unwrap();
        let session = response.into_session();
        let remaining = session.time_to_expiry();
        assert!(remaining > 3500 && remaining <= 3600);
    }
}
