//! The table trait, schema namespaces and shape resolution.
//!
//! Every table is a zero-sized marker type implementing [`Table`]. The
//! marker carries three associated shapes, all generated from one canonical
//! column list by `define_table!`:
//!
//! - `Row`: the complete record returned by a read.
//! - `Insert`: required columns are plain fields, server-defaulted and
//!   nullable columns are optional.
//! - `Update`: every column is optional; the default value is the empty patch.
//!
//! Shapes are resolved with the [`Row`], [`Insert`] and [`Update`] aliases
//! against the table's own schema, or with [`RowIn`], [`InsertIn`] and
//! [`UpdateIn`] when the caller names the schema explicitly. A table that
//! does not belong to the named schema has no shape at all:
//!
//! ```compile_fail
//! use ayur_schema::{RowIn, Schema};
//! use ayur_schema::public::Profiles;
//!
//! struct Analytics;
//! impl Schema for Analytics {
//!     const NAME: &'static str = "analytics";
//! }
//!
//! // `profiles` lives in `public`, so this does not resolve.
//! fn read(_: RowIn<Analytics, Profiles>) {}
//! ```
//!
//! Unknown table names are rejected the same way:
//!
//! ```compile_fail
//! use ayur_schema::Row;
//! use ayur_schema::public::Orders;
//!
//! fn read(_: Row<Orders>) {}
//! ```

use crate::types::{Column, ColumnKind, Relationship};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// A schema namespace in the hosted database.
pub trait Schema: Send + Sync + 'static {
    /// Namespace name, e.g. `public`.
    const NAME: &'static str;
}

/// The default namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Public;

impl Schema for Public {
    const NAME: &'static str = "public";
}

/// A table known at compile time.
pub trait Table: Copy + Default + Send + Sync + 'static {
    /// Namespace the table lives in.
    type Schema: Schema;

    /// The complete record returned by a read.
    type Row: Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static;

    /// The shape required to create a record.
    type Insert: Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static;

    /// The shape accepted by a partial patch.
    type Update: Serialize
        + DeserializeOwned
        + Clone
        + Debug
        + Default
        + PartialEq
        + Send
        + Sync
        + 'static;

    /// Table name.
    const NAME: &'static str;

    /// Primary key column.
    const PRIMARY_KEY: &'static str;

    /// Every column, required first, then defaulted, then nullable.
    const COLUMNS: &'static [Column];

    /// Declared foreign keys.
    const RELATIONSHIPS: &'static [Relationship];

    /// Look up a column by name.
    fn column(name: &str) -> Option<&'static Column> {
        Self::COLUMNS.iter().find(|c| c.name == name)
    }

    /// Check whether the table has a column.
    fn has_column(name: &str) -> bool {
        Self::column(name).is_some()
    }
}

/// Resolution of a table's shapes inside an explicitly named schema.
///
/// Implemented only for the schema a table actually belongs to.
pub trait InSchema<S: Schema> {
    type Row;
    type Insert;
    type Update;
}

impl<T: Table> InSchema<T::Schema> for T {
    type Row = T::Row;
    type Insert = T::Insert;
    type Update = T::Update;
}

/// Row shape of `T`.
pub type Row<T> = <T as Table>::Row;
/// Insert shape of `T`.
pub type Insert<T> = <T as Table>::Insert;
/// Update shape of `T`.
pub type Update<T> = <T as Table>::Update;

/// Row shape of `T` resolved inside schema `S`.
pub type RowIn<S, T> = <T as InSchema<S>>::Row;
/// Insert shape of `T` resolved inside schema `S`.
pub type InsertIn<S, T> = <T as InSchema<S>>::Insert;
/// Update shape of `T` resolved inside schema `S`.
pub type UpdateIn<S, T> = <T as InSchema<S>>::Update;

/// Runtime description of a table, for listing and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableInfo {
    pub schema: &'static str,
    pub name: &'static str,
    pub primary_key: &'static str,
    pub columns: &'static [Column],
    pub relationships: &'static [Relationship],
}

impl TableInfo {
    /// Describe a table type.
    pub const fn of<T: Table>() -> Self {
        Self {
            schema: <T::Schema as Schema>::NAME,
            name: T::NAME,
            primary_key: T::PRIMARY_KEY,
            columns: T::COLUMNS,
            relationships: T::RELATIONSHIPS,
        }
    }

    /// Columns of the given kind.
    pub fn columns_of(&self, kind: ColumnKind) -> impl Iterator<Item = &'static Column> {
        let columns: &'static [Column] = self.columns;
        columns.iter().filter(move |c| c.kind == kind)
    }

    /// Columns the server fills in when an insert omits them.
    pub fn server_defaulted(&self) -> impl Iterator<Item = &'static Column> {
        self.columns_of(ColumnKind::Defaulted)
    }

    /// Columns every insert must carry.
    pub fn required(&self) -> impl Iterator<Item = &'static Column> {
        self.columns_of(ColumnKind::Required)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }
}

/// Database column name of a field: the explicit rename if given, else the
/// field name.
macro_rules! column_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $column:literal) => {
        $column
    };
}

pub(crate) use column_name;

/// Declare a table from its canonical column list.
///
/// Generates the marker type, the three shapes and the [`Table`] impl. The
/// insert shape gets a `new` constructor over the required columns, and the
/// update shape gets `is_empty` and `set_columns`. A field written
/// `name = "column"` maps to a differently named column.
macro_rules! define_table {
    (
        $(#[$meta:meta])*
        $vis:vis struct $table:ident in $schema:ty as $name:literal {
            row: $row:ident,
            insert: $insert:ident,
            update: $update:ident,
            primary_key: $pk:literal,
            required { $($req:ident $(= $req_col:literal)? : $req_ty:ty),* $(,)? }
            defaulted { $($def:ident $(= $def_col:literal)? : $def_ty:ty),* $(,)? }
            nullable { $($null:ident $(= $null_col:literal)? : $null_ty:ty),* $(,)? }
            relationships [
                $( $fk_name:literal : $fk_col:literal => $ref_table:literal . $ref_col:literal ),* $(,)?
            ]
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $table;

        #[doc = concat!("A complete `", $name, "` record as returned by a read.")]
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        $vis struct $row {
            $( $(#[serde(rename = $req_col)])? pub $req: $req_ty, )*
            $( $(#[serde(rename = $def_col)])? pub $def: $def_ty, )*
            $( $(#[serde(rename = $null_col)])? pub $null: Option<$null_ty>, )*
        }

        #[doc = concat!("Values for creating a `", $name, "` record.")]
        ///
        /// Omitted defaulted columns are filled in by the server; omitted
        /// nullable columns are stored as NULL.
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        $vis struct $insert {
            $( $(#[serde(rename = $req_col)])? pub $req: $req_ty, )*
            $(
                $(#[serde(rename = $def_col)])?
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $def: Option<$def_ty>,
            )*
            $(
                $(#[serde(rename = $null_col)])?
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $null: Option<$null_ty>,
            )*
        }

        impl $insert {
            /// Build an insert carrying only the required columns.
            #[allow(clippy::too_many_arguments)]
            pub fn new($($req: $req_ty),*) -> Self {
                Self {
                    $( $req, )*
                    $( $def: None, )*
                    $( $null: None, )*
                }
            }
        }

        #[doc = concat!("A partial patch for a `", $name, "` record.")]
        ///
        /// `None` leaves a column unchanged. Nullable columns take
        /// `Some(None)` to store NULL.
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        $vis struct $update {
            $(
                $(#[serde(rename = $req_col)])?
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $req: Option<$req_ty>,
            )*
            $(
                $(#[serde(rename = $def_col)])?
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $def: Option<$def_ty>,
            )*
            $(
                $(#[serde(rename = $null_col)])?
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $null: Option<Option<$null_ty>>,
            )*
        }

        impl $update {
            /// Whether the patch touches no column.
            pub fn is_empty(&self) -> bool {
                self.set_columns().is_empty()
            }

            /// Names of the columns this patch sets.
            pub fn set_columns(&self) -> Vec<&'static str> {
                let mut set = Vec::new();
                $( if self.$req.is_some() { set.push($crate::table::column_name!($req $(, $req_col)?)); } )*
                $( if self.$def.is_some() { set.push($crate::table::column_name!($def $(, $def_col)?)); } )*
                $( if self.$null.is_some() { set.push($crate::table::column_name!($null $(, $null_col)?)); } )*
                set
            }
        }

        impl $crate::table::Table for $table {
            type Schema = $schema;
            type Row = $row;
            type Insert = $insert;
            type Update = $update;

            const NAME: &'static str = $name;
            const PRIMARY_KEY: &'static str = $pk;
            const COLUMNS: &'static [$crate::types::Column] = &[
                $( $crate::types::Column::required($crate::table::column_name!($req $(, $req_col)?)), )*
                $( $crate::types::Column::defaulted($crate::table::column_name!($def $(, $def_col)?)), )*
                $( $crate::types::Column::nullable($crate::table::column_name!($null $(, $null_col)?)), )*
            ];
            const RELATIONSHIPS: &'static [$crate::types::Relationship] = &[
                $(
                    $crate::types::Relationship {
                        foreign_key_name: $fk_name,
                        columns: &[$fk_col],
                        is_one_to_one: false,
                        referenced_relation: $ref_table,
                        referenced_columns: &[$ref_col],
                    },
                )*
            ];
        }
    };
}

pub(crate) use define_table;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::public::{ChatMessages, Profiles};

    #[test]
    fn test_table_info_of() {
        let info = TableInfo::of::<Profiles>();
        assert_eq!(info.schema, "public");
        assert_eq!(info.name, "profiles");
        assert_eq!(info.primary_key, "id");
        assert!(info.has_column("email"));
        assert!(!info.has_column("password"));
    }

    #[test]
    fn test_column_lookup() {
        let col = Profiles::column("role").unwrap();
        assert_eq!(col.kind, ColumnKind::Defaulted);
        assert!(Profiles::column("nope").is_none());
    }

    #[test]
    fn test_relationship_metadata() {
        let rels = ChatMessages::RELATIONSHIPS;
        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].foreign_key_name, "chat_messages_session_id_fkey");
        assert_eq!(rels[0].columns, &["session_id"]);
        assert_eq!(rels[0].referenced_relation, "chat_sessions");
        assert_eq!(rels[0].referenced_columns, &["id"]);
    }

    #[test]
    fn test_qualified_resolution_matches_default() {
        fn same<A: 'static, B: 'static>() -> bool {
            std::any::TypeId::of::<A>() == std::any::TypeId::of::<B>()
        }
        assert!(same::<Row<Profiles>, RowIn<Public, Profiles>>());
        assert!(same::<Insert<Profiles>, InsertIn<Public, Profiles>>());
        assert!(same::<Update<Profiles>, UpdateIn<Public, Profiles>>());
    }
}
