//! Shopping cart page.

use crate::sections::*;
use crate::{Route, ViewContext};
use ayur_commerce::checkout::OrderSummary;

/// Render the cart: an empty state, or the lines beside an order summary.
pub fn render_cart(ctx: &ViewContext<'_>) -> String {
    let content = if ctx.cart.is_empty() {
        format!(
            r#"<section class="cart-empty">
        <h2>Your cart is empty</h2>
        <p>Start shopping to add items to your cart</p>
        <a class="button" href="{}">Browse Products</a>
        <a class="button button--outline" href="{}">Wellness Programs</a>
    </section>"#,
            Route::Marketplace.path(),
            Route::WellnessJourney.path()
        )
    } else {
        let lines: String = ctx
            .cart
            .items()
            .iter()
            .map(render_cart_line)
            .collect::<Vec<_>>()
            .join("\n");
        let summary = match OrderSummary::for_cart(ctx.cart) {
            Ok(summary) => render_order_summary(&summary, false),
            Err(e) => {
                tracing::warn!(error = %e, "cart total unavailable");
                r#"<aside class="order-summary order-summary--error">Cart total unavailable</aside>"#
                    .to_string()
            }
        };
        format!(
            r#"<section class="cart-lines">
{lines}
    </section>
    {summary}
    <a class="button" href="{payment}">Proceed to Checkout</a>
    <a class="button button--outline" href="{marketplace}">Continue Shopping</a>"#,
            lines = lines,
            summary = summary,
            payment = Route::Payment.path(),
            marketplace = Route::Marketplace.path()
        )
    };

    format!(
        r#"{header}
<main>
    <h1>Shopping Cart <span class="count">({items} items)</span></h1>
    {content}
</main>
{footer}"#,
        header = render_header(&inner_nav(&[NavLink::new(
            "Marketplace",
            Route::Marketplace.path()
        )])),
        items = ctx.cart.total_items(),
        content = content,
        footer = render_footer(),
    )
}
