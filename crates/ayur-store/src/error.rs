//! Store client error types.

use thiserror::Error;

/// Errors that can occur when talking to the hosted store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// A column name that the table does not have.
    #[error("Unknown column {column} on table {table}")]
    UnknownColumn { table: String, column: String },

    /// A single row was expected but none matched.
    #[error("No rows returned from {table}")]
    NotFound { table: String },

    /// A single row was expected but several matched.
    #[error("Expected one row from {table}, got {count}")]
    MultipleRows { table: String, count: usize },

    /// An update or delete without any filter.
    #[error("Refusing to {operation} every row of {table}; add a filter")]
    MissingFilter {
        table: String,
        operation: &'static str,
    },

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// HTTP status of a rejected request, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::JsonError(e.to_string())
    }
}
