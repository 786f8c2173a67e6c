//! Server-side functions callable through the remote procedure endpoint.
//!
//! Each function is a marker type with typed arguments and a typed return.
//! The argument struct serializes to the exact parameter names the server
//! expects, leading underscore included.

use crate::public::UserRole;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

/// A callable server function.
pub trait DbFunction: Send + Sync + 'static {
    /// Function name on the server.
    const NAME: &'static str;

    /// Named arguments.
    type Args: Serialize + Debug + Send + Sync;

    /// Decoded result.
    type Returns: DeserializeOwned + Debug + Send;
}

/// Role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetUserRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserRoleArgs {
    #[serde(rename = "_user_id")]
    pub user_id: Uuid,
}

impl DbFunction for GetUserRole {
    const NAME: &'static str = "get_user_role";
    type Args = GetUserRoleArgs;
    type Returns = UserRole;
}

/// Whether a user holds a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HasRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasRoleArgs {
    #[serde(rename = "_user_id")]
    pub user_id: Uuid,
    #[serde(rename = "_role")]
    pub role: UserRole,
}

impl DbFunction for HasRole {
    const NAME: &'static str = "has_role";
    type Args = HasRoleArgs;
    type Returns = bool;
}

/// Names of every function in the schema.
pub const FUNCTIONS: &[&str] = &[GetUserRole::NAME, HasRole::NAME];
