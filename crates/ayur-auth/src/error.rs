//! Authentication errors.

use ayur_store::StoreError;
use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No session is active.
    #[error("not signed in")]
    NotSignedIn,

    /// Session expired.
    #[error("session expired")]
    SessionExpired,

    /// Email or password rejected at sign-up.
    #[error("sign-up rejected: {0}")]
    SignUpRejected(String),

    /// Transport or server failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials | AuthError::NotSignedIn | AuthError::SessionExpired
        )
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(e: serde_json::Error) -> Self {
        AuthError::Serialization(e.to_string())
    }
}
