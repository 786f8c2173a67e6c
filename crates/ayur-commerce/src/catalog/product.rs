//! Marketplace products.

use crate::cart::CartItem;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A herbal product listed in the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ItemId,
    pub name: String,
    pub brand: String,
    /// Selling price.
    pub price: Money,
    /// List price before discount.
    pub original_price: Option<Money>,
    /// Average rating out of 5.
    pub rating: f32,
    pub reviews: u32,
    pub image: String,
    pub category: String,
    pub description: String,
    pub benefits: Vec<String>,
}

impl Product {
    /// Check if this product is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_minor > self.price.amount_minor)
            .unwrap_or(false)
    }

    /// Whole-percent discount off the list price, if on sale.
    pub fn discount_percentage(&self) -> Option<u32> {
        let original = self.original_price?;
        if original.amount_minor <= self.price.amount_minor {
            return None;
        }
        let savings = (original.amount_minor - self.price.amount_minor) as f64;
        Some((savings / original.amount_minor as f64 * 100.0).round() as u32)
    }

    /// Number of filled stars when the rating is shown out of five.
    pub fn full_stars(&self) -> u8 {
        self.rating.clamp(0.0, 5.0).floor() as u8
    }

    /// Whether the name or brand contains `needle`, ignoring case.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.brand.to_lowercase().contains(&needle)
    }

    /// A cart entry for one unit of this product.
    pub fn to_cart_item(&self) -> CartItem {
        let item = CartItem::new(
            self.id.clone(),
            self.name.clone(),
            self.brand.clone(),
            self.category.clone(),
            self.price,
        )
        .with_image(self.image.clone());
        match self.original_price {
            Some(original) => item.with_original_price(original),
            None => item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ItemId::new("herb-1"),
            name: "Ashwagandha Capsules".into(),
            brand: "Dabur".into(),
            price: Money::inr(299),
            original_price: Some(Money::inr(399)),
            rating: 4.5,
            reviews: 234,
            image: "/placeholder.svg".into(),
            category: "Stress Relief".into(),
            description: String::new(),
            benefits: vec![],
        }
    }

    #[test]
    fn test_discount_percentage() {
        assert_eq!(sample().discount_percentage(), Some(25));
        let mut full_price = sample();
        full_price.original_price = None;
        assert_eq!(full_price.discount_percentage(), None);
        assert!(!full_price.is_on_sale());
    }

    #[test]
    fn test_full_stars() {
        assert_eq!(sample().full_stars(), 4);
    }

    #[test]
    fn test_matches_search() {
        let p = sample();
        assert!(p.matches_search("ASHWA"));
        assert!(p.matches_search("dab"));
        assert!(p.matches_search(""));
        assert!(!p.matches_search("triphala"));
    }

    #[test]
    fn test_to_cart_item() {
        let item = sample().to_cart_item();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, Money::inr(299));
        assert_eq!(item.original_price, Some(Money::inr(399)));
        assert_eq!(item.image.as_deref(), Some("/placeholder.svg"));
    }
}
