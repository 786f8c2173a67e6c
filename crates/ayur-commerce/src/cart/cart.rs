//! Cart and cart item types.

use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something placed in the cart: a product, a program or a consultation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Identity within the cart; one entry per id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Brand or provider.
    pub brand: String,
    /// Category label.
    pub category: String,
    /// Unit price.
    pub price: Money,
    /// Price before discount, if any.
    pub original_price: Option<Money>,
    /// Always at least 1.
    pub quantity: i64,
    /// Image path.
    pub image: Option<String>,
}

impl CartItem {
    /// Create an item with quantity 1.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            price,
            original_price: None,
            quantity: 1,
            image: None,
        }
    }

    /// Set the pre-discount price.
    pub fn with_original_price(mut self, price: Money) -> Self {
        self.original_price = Some(price);
        self
    }

    /// Set the quantity; values below 1 become 1.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// Cart mutations, as logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    ItemAdded,
    QuantityIncreased,
    QuantityChanged,
    ItemRemoved,
    Cleared,
}

impl CartEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded => "item_added",
            CartEvent::QuantityIncreased => "quantity_increased",
            CartEvent::QuantityChanged => "quantity_changed",
            CartEvent::ItemRemoved => "item_removed",
            CartEvent::Cleared => "cleared",
        }
    }
}

impl fmt::Display for CartEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shopping cart.
///
/// Items keep insertion order and ids are unique. Deserialized carts are
/// rebuilt through [`Cart::add_item`], so repeated ids merge and quantities
/// below 1 become 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "CartRepr")]
pub struct Cart {
    items: Vec<CartItem>,
}

/// Wire shape of a [`Cart`].
#[derive(Deserialize)]
struct CartRepr {
    items: Vec<CartItem>,
}

impl TryFrom<CartRepr> for Cart {
    type Error = CommerceError;

    fn try_from(repr: CartRepr) -> Result<Self, Self::Error> {
        let mut cart = Cart::new();
        for item in repr.items {
            cart.add_item(item)?;
        }
        Ok(cart)
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item.
    ///
    /// A new id is appended at the end. If the id is already present, its
    /// quantity grows by the added quantity and the stored details are kept.
    pub fn add_item(&mut self, item: CartItem) -> Result<(), CommerceError> {
        let added = item.quantity.max(1);

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing
                .quantity
                .checked_add(added)
                .ok_or(CommerceError::Overflow)?;
            tracing::debug!(event = %CartEvent::QuantityIncreased, id = %existing.id, quantity = existing.quantity);
            return Ok(());
        }

        tracing::debug!(event = %CartEvent::ItemAdded, id = %item.id, quantity = added);
        self.items.push(CartItem {
            quantity: added,
            ..item
        });
        Ok(())
    }

    /// Remove the entry with this id. Returns whether one was removed.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(event = %CartEvent::ItemRemoved, %id);
        }
        removed
    }

    /// Set an item's quantity. Values below 1 are clamped to 1; removal is
    /// always explicit.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: i64) -> bool {
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                item.quantity = quantity.max(1);
                tracing::debug!(event = %CartEvent::QuantityChanged, %id, quantity = item.quantity);
                true
            }
            None => false,
        }
    }

    /// Set a quantity from free-text input. Text without a leading number
    /// counts as 1.
    pub fn set_quantity_input(&mut self, id: &ItemId, input: &str) -> bool {
        self.set_quantity(id, parse_quantity_input(input))
    }

    /// One more of an item.
    pub fn increment(&mut self, id: &ItemId) -> bool {
        match self.get(id).map(|i| i.quantity.saturating_add(1)) {
            Some(quantity) => self.set_quantity(id, quantity),
            None => false,
        }
    }

    /// One fewer of an item, never below 1.
    pub fn decrement(&mut self, id: &ItemId) -> bool {
        match self.get(id).map(|i| i.quantity.saturating_sub(1)) {
            Some(quantity) => self.set_quantity(id, quantity),
            None => false,
        }
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!(event = %CartEvent::Cleared);
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of unit price times quantity over all items.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        let lines = self
            .items
            .iter()
            .map(CartItem::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(lines.iter(), Currency::INR).ok_or_else(|| {
            match lines.iter().find(|m| m.currency != Currency::INR) {
                Some(other) => CommerceError::CurrencyMismatch {
                    expected: Currency::INR.code().to_string(),
                    got: other.currency.code().to_string(),
                },
                None => CommerceError::Overflow,
            }
        })
    }
}

/// Read a quantity typed by a user.
///
/// Takes an optional sign and the leading digits, ignoring anything after.
/// Input without a leading number, or a number of zero, reads as 1.
pub fn parse_quantity_input(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<i64>() {
        Ok(0) | Err(_) => 1,
        Ok(n) if negative => -n,
        Ok(n) => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn herb(id: &str, rupees: i64) -> CartItem {
        CartItem::new(id, "Ashwagandha Capsules", "Dabur", "Stress Relief", Money::inr(rupees))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price().unwrap(), Money::inr(0));
    }

    #[test]
    fn test_add_item_appends() {
        let mut cart = Cart::new();
        cart.add_item(herb("herb-1", 299)).unwrap();
        cart.add_item(herb("herb-2", 149)).unwrap();
        let ids: Vec<_> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["herb-1", "herb-2"]);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_item(herb("herb-1", 299)).unwrap();
        cart.add_item(herb("herb-1", 299).with_quantity(2)).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price().unwrap(), Money::inr(897));
    }

    #[test]
    fn test_set_quantity_clamps() {
        let mut cart = Cart::new();
        let id = ItemId::new("herb-1");
        cart.add_item(herb("herb-1", 299)).unwrap();
        assert!(cart.set_quantity(&id, 0));
        assert_eq!(cart.get(&id).unwrap().quantity, 1);
        assert!(cart.set_quantity(&id, -5));
        assert_eq!(cart.get(&id).unwrap().quantity, 1);
        assert!(!cart.set_quantity(&ItemId::new("missing"), 3));
    }

    #[test]
    fn test_set_quantity_input() {
        let mut cart = Cart::new();
        let id = ItemId::new("herb-1");
        cart.add_item(herb("herb-1", 299)).unwrap();
        cart.set_quantity_input(&id, "abc");
        assert_eq!(cart.get(&id).unwrap().quantity, 1);
        cart.set_quantity_input(&id, "4");
        assert_eq!(cart.get(&id).unwrap().quantity, 4);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let mut cart = Cart::new();
        let id = ItemId::new("herb-1");
        cart.add_item(herb("herb-1", 299).with_quantity(2)).unwrap();
        cart.decrement(&id);
        cart.decrement(&id);
        assert_eq!(cart.get(&id).unwrap().quantity, 1);
        cart.increment(&id);
        assert_eq!(cart.get(&id).unwrap().quantity, 2);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(herb("herb-1", 299)).unwrap();
        cart.add_item(herb("herb-2", 149)).unwrap();
        assert!(cart.remove_item(&ItemId::new("herb-1")));
        assert!(!cart.remove_item(&ItemId::new("herb-1")));
        assert_eq!(cart.len(), 1);
        assert!(cart.contains(&ItemId::new("herb-2")));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(herb("herb-1", 299)).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_price_overflow() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("big", "Big", "B", "C", Money::new(i64::MAX, Currency::INR)).with_quantity(2))
            .unwrap();
        assert_eq!(cart.total_price(), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_deserialized_cart_keeps_quantity_and_id_rules() {
        let json = r#"{"items":[
            {"id":"herb-1","name":"Ashwagandha Capsules","brand":"Dabur","category":"Stress Relief",
             "price":{"amount_minor":29900,"currency":"INR"},"original_price":null,"quantity":0,"image":null},
            {"id":"herb-2","name":"Triphala Churna","brand":"Himalaya","category":"Digestive Health",
             "price":{"amount_minor":14900,"currency":"INR"},"original_price":null,"quantity":-4,"image":null},
            {"id":"herb-1","name":"Ashwagandha Capsules","brand":"Dabur","category":"Stress Relief",
             "price":{"amount_minor":29900,"currency":"INR"},"original_price":null,"quantity":2,"image":null}
        ]}"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        let quantities: Vec<_> = cart.items().iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![3, 1]);
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price().unwrap(), Money::inr(299 * 3 + 149));
    }

    fn line_json(id: &str, quantity: i64) -> String {
        format!(
            r#"{{"id":"{id}","name":"A","brand":"B","category":"C","price":{{"amount_minor":100,"currency":"INR"}},"original_price":null,"quantity":{quantity},"image":null}}"#
        )
    }

    #[test]
    fn test_deserialized_cart_rejects_quantity_overflow() {
        let json = format!(
            r#"{{"items":[{},{}]}}"#,
            line_json("herb-1", i64::MAX),
            line_json("herb-1", 1)
        );
        assert!(serde_json::from_str::<Cart>(&json).is_err());
    }

    #[test]
    fn test_decrement_after_deserializing_extreme_quantity() {
        let json = format!(r#"{{"items":[{}]}}"#, line_json("herb-1", i64::MIN));
        let mut cart: Cart = serde_json::from_str(&json).unwrap();
        let id = ItemId::new("herb-1");
        assert!(cart.decrement(&id));
        assert_eq!(cart.get(&id).unwrap().quantity, 1);
        assert_eq!(cart.total_price().unwrap(), Money::new(100, Currency::INR));
    }

    #[test]
    fn test_parse_quantity_input() {
        assert_eq!(parse_quantity_input("3"), 3);
        assert_eq!(parse_quantity_input(" 12 "), 12);
        assert_eq!(parse_quantity_input("7kg"), 7);
        assert_eq!(parse_quantity_input(""), 1);
        assert_eq!(parse_quantity_input("0"), 1);
        assert_eq!(parse_quantity_input("-2"), -2);
        assert_eq!(parse_quantity_input("x9"), 1);
    }
}
