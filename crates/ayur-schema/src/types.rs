//! Column and relationship metadata shared by every table.

/// Semi-structured document stored in a JSON column.
pub type Json = serde_json::Value;

/// How a column participates in inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Must be supplied when inserting.
    Required,
    /// The server assigns a default when the column is omitted.
    Defaulted,
    /// May hold NULL; omitting it on insert stores NULL.
    Nullable,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Required => "required",
            ColumnKind::Defaulted => "defaulted",
            ColumnKind::Nullable => "nullable",
        }
    }

    /// Whether an insert may leave the column out.
    pub fn is_optional_on_insert(&self) -> bool {
        !matches!(self, ColumnKind::Required)
    }
}

/// A column of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Required,
        }
    }

    pub const fn defaulted(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Defaulted,
        }
    }

    pub const fn nullable(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Nullable,
        }
    }
}

/// A declared foreign key.
///
/// Metadata only: the client never enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relationship {
    /// Constraint name, e.g. `chat_messages_session_id_fkey`.
    pub foreign_key_name: &'static str,
    /// Referencing columns on the owning table.
    pub columns: &'static [&'static str],
    /// Whether at most one row references each target row.
    pub is_one_to_one: bool,
    /// Referenced table.
    pub referenced_relation: &'static str,
    /// Referenced columns.
    pub referenced_columns: &'static [&'static str],
}
