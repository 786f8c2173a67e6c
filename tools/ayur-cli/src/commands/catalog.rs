//! Marketplace listing.

use anyhow::Result;
use ayur_commerce::catalog::{Catalog, CatalogQuery, SortOption};
use console::style;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::price_with_original;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::default_catalog();
    let mut query = CatalogQuery::new()
        .with_search(args.search)
        .with_sort(args.sort.parse::<SortOption>()?);
    if let Some(category) = args.category {
        query = query.with_category(category);
    }
    let products = catalog.query(&query);
    tracing::debug!(count = products.len(), sort = query.sort.as_str(), "catalog query");

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Trusted Herbal Marketplace");
    ctx.output.kv("categories", &catalog.categories().join(" | "));
    ctx.output.kv("sort", query.sort.display_name());

    if products.is_empty() {
        ctx.output.warn("No products found matching your criteria.");
        return Ok(());
    }

    for product in products {
        println!(
            "\n  {} {} {}",
            style(product.name.as_str()).bold(),
            style(format!("by {}", product.brand)).dim(),
            style(format!("[{}]", product.id)).dim()
        );
        println!(
            "    {}  {}  {} {:.1} ({} reviews)",
            price_with_original(product.price, product.original_price),
            style(product.category.as_str()).cyan(),
            "★".repeat(product.full_stars() as usize),
            product.rating,
            product.reviews
        );
        if let Some(discount) = product.discount_percentage() {
            ctx.output.debug(&format!("{}% off", discount));
        }
        println!("    {}", product.description);
    }
    Ok(())
}
