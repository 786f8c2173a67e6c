//! Shopping cart module.
//!
//! The cart is a plain value owned by the caller. Totals are derived from
//! the items on every read and never stored.

mod cart;

pub use cart::{parse_quantity_input, Cart, CartEvent, CartItem};
