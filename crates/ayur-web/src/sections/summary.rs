//! Order summary panel.

use ayur_commerce::checkout::OrderSummary;

/// Render the summary panel. The tax row appears only when `show_tax` is set;
/// the cart page shows the pre-tax total, the payment page the full one.
pub fn render_order_summary(summary: &OrderSummary, show_tax: bool) -> String {
    let tax_row = if show_tax {
        format!(
            r#"
        <div class="summary-row"><span>Tax</span><span>{}</span></div>"#,
            summary.tax.display()
        )
    } else {
        String::new()
    };
    let total = if show_tax {
        summary.total
    } else {
        summary.subtotal
    };

    format!(
        r#"<aside class="order-summary">
    <h2>Order Summary</h2>
    <div class="summary-rows">
        <div class="summary-row"><span>Items ({items})</span><span>{subtotal}</span></div>
        <div class="summary-row"><span>Shipping</span><span class="free">{shipping}</span></div>{tax_row}
    </div>
    <div class="summary-total"><span>Total</span><span>{total}</span></div>
</aside>"#,
        items = summary.total_items,
        subtotal = summary.subtotal.display(),
        shipping = summary.shipping_label(),
        tax_row = tax_row,
        total = total.display(),
    )
}
