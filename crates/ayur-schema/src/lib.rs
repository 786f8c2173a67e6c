//! Typed schema registry for the AyurCare hosted database.
//!
//! Every table, enum and server function the application touches is declared
//! here once. Each table yields three shapes (`Row`, `Insert`, `Update`) that
//! are resolved at compile time, so a misspelled table or a wrong schema is a
//! type error rather than a runtime surprise.
//!
//! # Example
//!
//! ```rust
//! use ayur_schema::{Insert, Row, Table, Update};
//! use ayur_schema::public::{ProfileInsert, ProfileUpdate, Profiles, UserRole};
//! use uuid::Uuid;
//!
//! // Only the required columns are needed to create a profile.
//! let new_profile: Insert<Profiles> =
//!     ProfileInsert::new("a@b.com".into(), "Asha Rao".into(), Uuid::new_v4());
//! assert!(new_profile.role.is_none());
//!
//! // A patch touches only what it names.
//! let patch: Update<Profiles> = ProfileUpdate {
//!     role: Some(UserRole::Doctor),
//!     ..Default::default()
//! };
//! assert_eq!(patch.set_columns(), vec!["role"]);
//!
//! assert_eq!(Profiles::NAME, "profiles");
//! # let _: Option<Row<Profiles>> = None;
//! ```

mod enums;
mod error;
mod table;
mod types;

pub mod constants;
pub mod functions;
pub mod public;

pub use enums::{enum_values, DbEnum, EnumValues};
pub use error::SchemaError;
pub use functions::DbFunction;
pub use table::{
    Insert, InsertIn, InSchema, Public, Row, RowIn, Schema, Table, TableInfo, Update, UpdateIn,
};
pub use types::{Column, ColumnKind, Json, Relationship};

/// Look up a table of the public schema by name.
///
/// This is the runtime counterpart of naming a table type; it exists for
/// tooling that receives table names as strings.
pub fn table_info(name: &str) -> Result<&'static TableInfo, SchemaError> {
    public::TABLES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| SchemaError::UnknownTable {
            schema: Public::NAME.to_string(),
            table: name.to_string(),
        })
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::public::*;
    pub use crate::{
        DbEnum, DbFunction, Insert, InsertIn, Json, Public, Row, RowIn, Schema, SchemaError,
        Table, TableInfo, Update, UpdateIn,
    };
}
