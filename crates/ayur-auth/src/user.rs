//! The signed-in user as the auth service reports it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// User id; `profiles.user_id` refers to it.
    pub id: Uuid,
    /// Email address, absent for phone-only accounts.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form metadata supplied at sign-up.
    #[serde(default)]
    pub user_metadata: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AuthUser {
    pub fn new(id: Uuid, email: impl Into<String>) -> Self {
        Self {
            id,
            email: Some(email.into()),
            user_metadata: serde_json::Value::Null,
            created_at: None,
        }
    }

    /// Full name from sign-up metadata.
    pub fn full_name(&self) -> Option<&str> {
        self.user_metadata.get("full_name").and_then(|v| v.as_str())
    }

    /// Name to greet the user with: full name, else email, else "there".
    pub fn display_name(&self) -> &str {
        self.full_name()
            .or(self.email.as_deref())
            .unwrap_or("there")
    }
}
