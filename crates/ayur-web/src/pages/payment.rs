//! Payment page.

use crate::sections::*;
use crate::{Route, ViewContext};
use ayur_commerce::checkout::{Bank, OrderSummary, PaymentMethodKind};

fn render_method_choices(selected: PaymentMethodKind) -> String {
    PaymentMethodKind::ALL
        .iter()
        .map(|kind| {
            format!(
                r#"<label><input type="radio" name="method" value="{}"{}> {}</label>"#,
                kind.as_str(),
                if *kind == selected { " checked" } else { "" },
                kind.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ")
}

fn render_method_details(kind: PaymentMethodKind) -> String {
    match kind {
        PaymentMethodKind::Card => r#"<fieldset class="card-details">
            <label for="cardNumber">Card Number</label>
            <input id="cardNumber" name="card_number" placeholder="1234 5678 9012 3456">
            <label for="expiry">Expiry Date</label>
            <input id="expiry" name="expiry" placeholder="MM/YY">
            <label for="cvv">CVV</label>
            <input id="cvv" name="cvv" placeholder="123">
            <label for="cardName">Name on Card</label>
            <input id="cardName" name="name_on_card" placeholder="John Doe">
        </fieldset>"#
            .to_string(),
        PaymentMethodKind::Upi => r#"<fieldset class="upi-details">
            <label for="upiId">UPI ID</label>
            <input id="upiId" name="vpa" placeholder="yourname@paytm">
        </fieldset>"#
            .to_string(),
        PaymentMethodKind::NetBanking => {
            let options: String = Bank::ALL
                .iter()
                .map(|b| format!(r#"<option value="{}">{}</option>"#, b.as_str(), b.display_name()))
                .collect();
            format!(
                r#"<fieldset class="netbanking-details">
            <label for="bank">Select Bank</label>
            <select id="bank" name="bank">{}</select>
        </fieldset>"#,
                options
            )
        }
    }
}

const BILLING_FORM: &str = r#"<fieldset class="billing">
            <legend>Billing Address</legend>
            <label for="fullName">Full Name</label>
            <input id="fullName" name="full_name" placeholder="John Doe">
            <label for="address">Address</label>
            <input id="address" name="address" placeholder="123 Main Street">
            <label for="city">City</label>
            <input id="city" name="city" placeholder="Mumbai">
            <label for="pincode">PIN Code</label>
            <input id="pincode" name="pin_code" placeholder="400001">
            <label for="state">State</label>
            <input id="state" name="state" placeholder="Maharashtra">
        </fieldset>"#;

/// Render the payment page, or a guard when there is nothing to pay for.
pub fn render_payment(ctx: &ViewContext<'_>) -> String {
    let header = render_header(&inner_nav(&[NavLink::new("Back to Cart", Route::Cart.path())]));

    if ctx.cart.is_empty() {
        return format!(
            r#"{}
<main>
    <section class="payment-empty">
        <h2>No items to pay for</h2>
        <p>Your cart is empty. Add some items first.</p>
        <a class="button" href="{}">Go to Marketplace</a>
    </section>
</main>
{}"#,
            header,
            Route::Marketplace.path(),
            render_footer()
        );
    }

    let items: String = ctx
        .cart
        .items()
        .iter()
        .map(|item| {
            let line = item
                .line_total()
                .map(|m| m.display())
                .unwrap_or_else(|_| "-".to_string());
            format!(
                r#"
        <div class="summary-item"><p>{}</p><p>Qty: {} &times; {}</p><span>{}</span></div>"#,
                html_escape(&item.name),
                item.quantity,
                item.price.display(),
                line
            )
        })
        .collect();

    let (summary, pay_label) = match OrderSummary::for_cart(ctx.cart) {
        Ok(summary) => (
            render_order_summary(&summary, true),
            format!("Pay {}", summary.total.display()),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "order summary unavailable");
            (
                r#"<aside class="order-summary order-summary--error">Order total unavailable</aside>"#
                    .to_string(),
                "Pay".to_string(),
            )
        }
    };

    format!(
        r#"{header}
<main>
    <h1>Secure Payment</h1>
    <form class="payment" method="post" action="/payment">
        <fieldset class="payment-method">
            <legend>Payment Method</legend>
            {choices}
        </fieldset>
        {details}
        {billing}
        <section class="summary-items">{items}
        </section>
        {summary}
        <button class="pay" type="submit">{pay_label}</button>
        <p class="secure-note">Your payment information is secure and encrypted</p>
    </form>
</main>
{footer}"#,
        header = header,
        choices = render_method_choices(ctx.payment_method),
        details = render_method_details(ctx.payment_method),
        billing = BILLING_FORM,
        items = items,
        summary = summary,
        pay_label = pay_label,
        footer = render_footer(),
    )
}
