//! Simulated payment.
//!
//! No payment provider is contacted. The simulator waits a fixed delay,
//! issues a receipt and empties the cart.

use crate::cart::{Cart, CartItem};
use crate::checkout::{BillingAddress, OrderSummary, PaymentMethod, DEFAULT_TAX_PERCENT};
use crate::error::CommerceError;
use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a simulated payment takes.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Shown once the simulated payment completes.
pub const PAYMENT_SUCCESS_MESSAGE: &str = "Payment successful! Your order has been confirmed.";

/// Record of a completed simulated payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentReceipt {
    pub order_id: OrderId,
    pub summary: OrderSummary,
    /// Cart contents at the time of payment.
    pub items: Vec<CartItem>,
    /// Masked description of the payment method.
    pub method: String,
    pub billing: BillingAddress,
    pub paid_at: DateTime<Utc>,
}

/// Runs simulated payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSimulator {
    delay: Duration,
    tax_percent: i64,
}

impl Default for CheckoutSimulator {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            tax_percent: DEFAULT_TAX_PERCENT,
        }
    }
}

impl CheckoutSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_tax_percent(mut self, percent: i64) -> Self {
        self.tax_percent = percent;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn tax_percent(&self) -> i64 {
        self.tax_percent
    }

    /// Pay for the cart.
    ///
    /// An empty cart is refused before waiting. The cart is cleared only
    /// after the delay, once the receipt exists.
    pub async fn pay(
        &self,
        cart: &mut Cart,
        method: &PaymentMethod,
        billing: &BillingAddress,
    ) -> Result<PaymentReceipt, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let summary = OrderSummary::with_tax_percent(cart, self.tax_percent)?;
        tracing::info!(
            method = method.kind().as_str(),
            total = %summary.total,
            items = summary.total_items,
            "processing payment"
        );

        tokio::time::sleep(self.delay).await;

        let receipt = PaymentReceipt {
            order_id: OrderId::generate(),
            summary,
            items: cart.items().to_vec(),
            method: method.summary(),
            billing: billing.clone(),
            paid_at: Utc::now(),
        };
        cart.clear();
        tracing::info!(order_id = %receipt.order_id, total = %receipt.summary.total, "payment confirmed");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let sim = CheckoutSimulator::new();
        assert_eq!(sim.delay(), Duration::from_secs(2));
        assert_eq!(sim.tax_percent(), 18);
    }

    #[tokio::test]
    async fn test_empty_cart_refused() {
        let mut cart = Cart::new();
        let err = CheckoutSimulator::new()
            .pay(&mut cart, &PaymentMethod::default(), &BillingAddress::default())
            .await
            .unwrap_err();
        assert_eq!(err, CommerceError::EmptyCart);
    }
}
