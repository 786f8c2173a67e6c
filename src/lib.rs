//! AyurCare: an Ayurvedic wellness marketplace.
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`schema`]: typed description of the hosted database
//! - [`store`]: client for the hosted store's REST interface
//! - [`auth`]: sign-in, sessions and auth state notifications
//! - [`commerce`]: catalog, cart, checkout simulation and programs
//! - [`web`]: server-rendered pages
//!
//! # Example
//!
//! ```
//! use ayurcare::prelude::*;
//!
//! let catalog = Catalog::default_catalog();
//! let mut cart = Cart::new();
//! cart.add_item(catalog.products()[0].to_cart_item()).unwrap();
//!
//! let view = ViewContext::new(AuthContext::anonymous(), &cart, &catalog);
//! let page = render(Route::Payment, &view);
//! assert!(page.html.contains("Pay ₹353"));
//! ```

pub use ayur_auth as auth;
pub use ayur_commerce as commerce;
pub use ayur_schema as schema;
pub use ayur_store as store;
pub use ayur_web as web;

/// Prelude for convenient imports.
pub mod prelude {
    pub use ayur_auth::{AuthClient, AuthContext, AuthEvent, AuthState, Session};
    pub use ayur_commerce::prelude::*;
    pub use ayur_schema::prelude::*;
    pub use ayur_store::prelude::*;
    pub use ayur_web::prelude::*;
}
