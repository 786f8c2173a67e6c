//! Schema error types.

use thiserror::Error;

/// Errors raised when a runtime name does not match the registry.
///
/// Typed lookups never produce these; they only come from string-keyed
/// entry points such as [`crate::table_info`] or parsing an enum value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// No table with this name exists in the schema.
    #[error("Unknown table: {schema}.{table}")]
    UnknownTable { schema: String, table: String },

    /// No enum with this name exists in the schema.
    #[error("Unknown enum: {0}")]
    UnknownEnum(String),

    /// The value is not a member of the enum.
    #[error("Invalid value {value:?} for enum {enum_name}")]
    InvalidEnumValue { enum_name: String, value: String },

    /// The column is not part of the table.
    #[error("Unknown column {column} on table {table}")]
    UnknownColumn { table: String, column: String },
}
