//! Runtime enum literal lists.
//!
//! Each list holds the same members, in the same order, as the enum type it
//! mirrors. Use these to populate pickers or validate untyped input.

use crate::enums::DbEnum;
use crate::error::SchemaError;
use crate::public::UserRole;

pub mod public {
    pub mod enums {
        use crate::enums::DbEnum;
        use crate::public::UserRole;

        /// Members of `user_role`.
        pub const USER_ROLE: &[&str] = UserRole::VALUES;
    }
}

/// Literal members of a public enum by its database name.
pub fn enum_values(name: &str) -> Result<&'static [&'static str], SchemaError> {
    match name {
        n if n == UserRole::NAME => Ok(public::enums::USER_ROLE),
        other => Err(SchemaError::UnknownEnum(other.to_string())),
    }
}
