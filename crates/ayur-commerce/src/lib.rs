//! Marketplace, cart and checkout logic for AyurCare.
//!
//! - **Catalog**: herbal products, category filter, search and sorting
//! - **Cart**: line items with derived totals
//! - **Checkout**: payment methods, order summary, simulated payment
//! - **Programs**: treatment programs and consultations that can be booked
//!
//! Prices are held in paise and displayed in the Indian style.
//!
//! # Example
//!
//! ```
//! use ayur_commerce::prelude::*;
//!
//! let catalog = Catalog::default_catalog();
//! let mut cart = Cart::new();
//! for product in catalog.query(&CatalogQuery::new().with_search("dabur")) {
//!     cart.add_item(product.to_cart_item()).unwrap();
//! }
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().unwrap().to_string(), "₹648");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod programs;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogQuery, Product, SortOption, ALL_CATEGORIES};

    // Cart
    pub use crate::cart::{Cart, CartItem};

    // Checkout
    pub use crate::checkout::{
        Bank, BillingAddress, CheckoutSimulator, OrderSummary, PaymentMethod, PaymentMethodKind,
        PaymentReceipt,
    };

    // Programs
    pub use crate::programs::{consultation_types, treatment_programs, ConsultationType, TreatmentProgram};
}
