//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in marketplace and checkout operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Program or consultation not found.
    #[error("Program not found: {0}")]
    ProgramNotFound(String),

    /// Checkout was attempted with nothing to pay for.
    #[error("Cart is empty")]
    EmptyCart,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Unknown sort option or similar bad input.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
