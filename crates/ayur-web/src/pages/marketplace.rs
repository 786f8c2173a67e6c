//! Herbal marketplace: search, category filter and product grid.

use crate::sections::*;
use crate::ViewContext;
use ayur_commerce::catalog::{SortOption, ALL_CATEGORIES};

fn render_sort_options(selected: SortOption) -> String {
    SortOption::ALL
        .iter()
        .map(|option| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                option.as_str(),
                if *option == selected { " selected" } else { "" },
                option.display_name()
            )
        })
        .collect()
}

fn render_categories(ctx: &ViewContext<'_>) -> String {
    let selected = ctx.query.category.as_deref().unwrap_or(ALL_CATEGORIES);
    ctx.catalog
        .categories()
        .iter()
        .map(|category| {
            format!(
                r#"<button class="{}" name="category" value="{}" type="submit">{}</button>"#,
                if category == selected { "button" } else { "button button--outline" },
                html_escape(category),
                html_escape(category)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ")
}

/// Render the marketplace.
pub fn render_marketplace(ctx: &ViewContext<'_>) -> String {
    let products = ctx.catalog.query(&ctx.query);
    let grid = if products.is_empty() {
        r#"<p class="empty">No products found matching your criteria.</p>"#.to_string()
    } else {
        products
            .iter()
            .map(|p| render_product_card(p))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let search = html_escape(&ctx.query.search);

    format!(
        r#"{header}
<main>
    <section class="hero">
        <h1>Trusted Herbal <span class="accent">Marketplace</span></h1>
        <p>Discover authentic Ayurvedic products from verified brands like Dabur, Hamdard, and Baidyanath</p>
        <form class="search" method="get" action="/marketplace">
            <input type="search" name="search" value="{search}" placeholder="Search for herbs, remedies, or brands...">
            <select name="sort">{sort}</select>
            <button type="submit">Search</button>
        </form>
    </section>
    <section class="categories">
        <form method="get" action="/marketplace">
            <input type="hidden" name="search" value="{search}">
            <input type="hidden" name="sort" value="{sort_value}">
            <span>Categories:</span>
            {categories}
        </form>
    </section>
    <section class="product-grid" data-count="{count}">
{grid}
    </section>
</main>
{footer}"#,
        header = render_header(&inner_nav(&[cart_link(ctx)])),
        search = search,
        sort = render_sort_options(ctx.query.sort),
        sort_value = ctx.query.sort.as_str(),
        categories = render_categories(ctx),
        count = products.len(),
        grid = grid,
        footer = render_footer(),
    )
}
