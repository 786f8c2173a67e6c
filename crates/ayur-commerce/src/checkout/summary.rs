//! Order summary shown next to the payment form.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Goods and services tax applied at checkout.
pub const DEFAULT_TAX_PERCENT: i64 = 18;

/// Subtotal, shipping, tax and total for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub total_items: i64,
    pub subtotal: Money,
    /// Always zero; shown as "Free".
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    /// Summary at the default tax rate.
    ///
    /// ```
    /// use ayur_commerce::cart::{Cart, CartItem};
    /// use ayur_commerce::checkout::OrderSummary;
    /// use ayur_commerce::money::Money;
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item(CartItem::new("herb-1", "Ashwagandha Capsules", "Dabur", "Stress Relief", Money::inr(299)))
    ///     .unwrap();
    /// let summary = OrderSummary::for_cart(&cart).unwrap();
    /// assert_eq!(summary.tax.to_string(), "₹54");
    /// assert_eq!(summary.total.to_string(), "₹353");
    /// ```
    pub fn for_cart(cart: &Cart) -> Result<Self, CommerceError> {
        Self::with_tax_percent(cart, DEFAULT_TAX_PERCENT)
    }

    /// Summary with tax at `percent`, rounded to the whole rupee.
    pub fn with_tax_percent(cart: &Cart, percent: i64) -> Result<Self, CommerceError> {
        let subtotal = cart.total_price()?;
        let tax = subtotal
            .try_percentage(percent)
            .ok_or(CommerceError::Overflow)?
            .round_to_major();
        let shipping = Money::zero(subtotal.currency);
        let total = subtotal
            .try_add(&shipping)
            .and_then(|m| m.try_add(&tax))
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            total_items: cart.total_items(),
            subtotal,
            shipping,
            tax,
            total,
        })
    }

    /// Shipping as shown to the customer.
    pub fn shipping_label(&self) -> String {
        if self.shipping.is_zero() {
            "Free".to_string()
        } else {
            self.shipping.display()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;

    #[test]
    fn test_empty_cart_summary() {
        let summary = OrderSummary::for_cart(&Cart::new()).unwrap();
        assert!(summary.total.is_zero());
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.shipping_label(), "Free");
    }

    #[test]
    fn test_tax_rounds_to_rupee() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("herb-2", "Triphala Churna", "Baidyanath", "Digestive Health", Money::inr(149)))
            .unwrap();
        cart.add_item(CartItem::new("herb-3", "Brahmi Oil", "Hamdard", "Mental Wellness", Money::inr(189)).with_quantity(2))
            .unwrap();
        // 527 * 0.18 = 94.86
        let summary = OrderSummary::for_cart(&cart).unwrap();
        assert_eq!(summary.subtotal, Money::inr(527));
        assert_eq!(summary.tax, Money::inr(95));
        assert_eq!(summary.total, Money::inr(622));
        assert_eq!(summary.total_items, 3);
    }

    #[test]
    fn test_custom_tax_rate() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("program-1", "Stress Relief Program", "AyurCare", "Program", Money::inr(2999)))
            .unwrap();
        let summary = OrderSummary::with_tax_percent(&cart, 0).unwrap();
        assert_eq!(summary.total, Money::inr(2999));
    }
}
