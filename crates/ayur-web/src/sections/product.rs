//! Product cards for the marketplace grid.

use super::html_escape;
use ayur_commerce::catalog::Product;

/// Render one product card.
pub fn render_product_card(product: &Product) -> String {
    let original = match product.original_price {
        Some(op) if product.is_on_sale() => format!(
            r#"<span class="price-original">{}</span>"#,
            op.display()
        ),
        _ => String::new(),
    };

    let benefits: String = product
        .benefits
        .iter()
        .map(|b| format!(r#"<span class="badge badge--outline">{}</span>"#, html_escape(b)))
        .collect();

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <img src="{image}" alt="{name}" loading="lazy">
    <h3 class="product-title">{name}</h3>
    <p class="product-brand">by {brand}</p>
    <span class="badge">{category}</span>
    <p class="product-description">{description}</p>
    <div class="product-benefits">{benefits}</div>
    <div class="product-rating">
        {stars}
        <span class="rating-value">{rating}</span>
        <span class="rating-count">({reviews} reviews)</span>
    </div>
    <div class="product-price">
        <span class="price-current">{price}</span>
        {original}
    </div>
    <form method="post" action="/cart/items">
        <input type="hidden" name="id" value="{id}">
        <button class="add-to-cart" type="submit">Add to Cart</button>
    </form>
</article>"#,
        id = html_escape(product.id.as_str()),
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        brand = html_escape(&product.brand),
        category = html_escape(&product.category),
        description = html_escape(&product.description),
        benefits = benefits,
        stars = render_stars(product.full_stars()),
        rating = product.rating,
        reviews = product.reviews,
        price = product.price.display(),
        original = original,
    )
}

/// Five stars, the first `full` filled.
pub fn render_stars(full: u8) -> String {
    let full = full.min(5);
    let mut html = String::from(r#"<span class="stars">"#);
    for i in 0..5 {
        if i < full {
            html.push_str(r#"<span class="star full">★</span>"#);
        } else {
            html.push_str(r#"<span class="star empty">☆</span>"#);
        }
    }
    html.push_str("</span>");
    html
}
