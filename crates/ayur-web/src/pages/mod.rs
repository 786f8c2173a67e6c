//! One renderer per route. Each returns the page body; the shell is added
//! by [`crate::render`].

mod auth;
mod cart;
mod home;
mod marketplace;
mod not_found;
mod payment;
mod wellness;

pub use auth::render_auth;
pub use cart::render_cart;
pub use home::render_home;
pub use marketplace::render_marketplace;
pub use not_found::render_not_found;
pub use payment::render_payment;
pub use wellness::render_wellness_journey;
