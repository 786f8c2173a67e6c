//! Cart line items.

use super::html_escape;
use ayur_commerce::cart::CartItem;

/// Render one cart line with quantity controls.
///
/// The decrement control is disabled at quantity 1.
pub fn render_cart_line(item: &CartItem) -> String {
    let image = match &item.image {
        Some(src) => format!(
            r#"<img src="{}" alt="{}">"#,
            html_escape(src),
            html_escape(&item.name)
        ),
        None => r#"<span class="item-placeholder">&#127807;</span>"#.to_string(),
    };
    let original = item
        .original_price
        .map(|op| format!(r#"<span class="price-original">{}</span>"#, op.display()))
        .unwrap_or_default();
    let line_total = item
        .line_total()
        .map(|m| m.display())
        .unwrap_or_else(|_| "-".to_string());
    let id = html_escape(item.id.as_str());

    format!(
        r#"<article class="cart-line" data-item-id="{id}">
    {image}
    <div class="cart-line-info">
        <h3>{name}</h3>
        <p class="cart-line-brand">by {brand}</p>
        <p class="cart-line-category">{category}</p>
        <span class="price-current">{price}</span>
        {original}
    </div>
    <form class="quantity-controls" method="post" action="/cart/items/{id}">
        <button name="quantity" value="{minus}" type="submit"{disabled}>&minus;</button>
        <input type="number" name="quantity" min="1" value="{quantity}">
        <button name="quantity" value="{plus}" type="submit">+</button>
    </form>
    <span class="cart-line-total">{line_total}</span>
    <form method="post" action="/cart/items/{id}/remove">
        <button class="remove" type="submit">Remove</button>
    </form>
</article>"#,
        id = id,
        image = image,
        name = html_escape(&item.name),
        brand = html_escape(&item.brand),
        category = html_escape(&item.category),
        price = item.price.display(),
        original = original,
        minus = item.quantity.saturating_sub(1),
        plus = item.quantity.saturating_add(1),
        quantity = item.quantity,
        disabled = if item.quantity <= 1 { " disabled" } else { "" },
        line_total = line_total,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayur_commerce::money::Money;

    #[test]
    fn test_decrement_disabled_at_one() {
        let item = CartItem::new("herb-3", "Brahmi Oil", "Hamdard", "Mental Wellness", Money::inr(189));
        let html = render_cart_line(&item);
        assert!(html.contains(r#"value="0" type="submit" disabled"#));
        assert!(html.contains("item-placeholder"));

        let html = render_cart_line(&item.with_quantity(3));
        assert!(!html.contains(" disabled"));
        assert!(html.contains("₹567"));
    }
}
