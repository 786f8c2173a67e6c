//! Server-rendered pages for AyurCare.
//!
//! Rendering is pure: a [`Route`] and a [`ViewContext`] go in, an HTML
//! [`Page`] comes out. Signed-in state is part of the context, never read
//! from a global.
//!
//! ```
//! use ayur_auth::AuthContext;
//! use ayur_commerce::{cart::Cart, catalog::Catalog};
//! use ayur_web::{render, Route, ViewContext};
//!
//! let cart = Cart::new();
//! let catalog = Catalog::default_catalog();
//! let ctx = ViewContext::new(AuthContext::anonymous(), &cart, &catalog);
//!
//! let page = render(Route::from_path("/cart"), &ctx);
//! assert_eq!(page.status, 200);
//! assert!(page.html.contains("Your cart is empty"));
//! ```

mod context;
pub mod pages;
mod route;
pub mod sections;

pub use context::ViewContext;
pub use route::Route;

use serde::Serialize;

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub route: Route,
    pub status: u16,
    pub title: &'static str,
    pub html: String,
}

/// Render the page for `route`.
pub fn render(route: Route, ctx: &ViewContext<'_>) -> Page {
    let body = match route {
        Route::Home => pages::render_home(ctx),
        Route::Auth => pages::render_auth(ctx),
        Route::Marketplace => pages::render_marketplace(ctx),
        Route::Cart => pages::render_cart(ctx),
        Route::Payment => pages::render_payment(ctx),
        Route::WellnessJourney => pages::render_wellness_journey(ctx),
        Route::NotFound => pages::render_not_found(route.path()),
    };
    tracing::debug!(route = %route, authenticated = ctx.is_authenticated(), bytes = body.len(), "page rendered");

    Page {
        route,
        status: route.status(),
        title: route.title(),
        html: sections::render_document(route.title(), &body),
    }
}

/// Render whatever lives at `path`, including a 404 page that echoes it.
pub fn render_path(path: &str, ctx: &ViewContext<'_>) -> Page {
    match Route::from_path(path) {
        Route::NotFound => {
            tracing::info!(path, "no route");
            let route = Route::NotFound;
            Page {
                route,
                status: route.status(),
                title: route.title(),
                html: sections::render_document(route.title(), &pages::render_not_found(path)),
            }
        }
        route => render(route, ctx),
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{render, render_path, Page, Route, ViewContext};
}
