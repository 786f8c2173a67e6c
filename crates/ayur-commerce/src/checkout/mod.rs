//! Checkout module.
//!
//! Payment method selection, billing address, the order summary shown
//! beside the payment form, and a simulated payment run.

mod address;
mod payment;
mod simulator;
mod summary;

pub use address::BillingAddress;
pub use payment::{Bank, PaymentMethod, PaymentMethodKind};
pub use simulator::{CheckoutSimulator, PaymentReceipt, DEFAULT_DELAY, PAYMENT_SUCCESS_MESSAGE};
pub use summary::{OrderSummary, DEFAULT_TAX_PERCENT};
