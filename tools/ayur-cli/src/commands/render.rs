//! Render a page to HTML.

use anyhow::{Context as _, Result};
use ayur_auth::{AuthContext, AuthUser};
use ayur_commerce::catalog::{Catalog, CatalogQuery, SortOption};
use ayur_commerce::checkout::PaymentMethodKind;
use ayur_web::{render_path, ViewContext};

use super::{cart_from_ids, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::default_catalog();
    let cart = if args.items.is_empty() {
        Default::default()
    } else {
        cart_from_ids(&catalog, &args.items)?
    };

    let auth = match args.signed_in_as {
        Some(email) => AuthContext::signed_in(AuthUser::new(Default::default(), email)),
        None => AuthContext::anonymous(),
    };

    let mut query = CatalogQuery::new()
        .with_search(args.search)
        .with_sort(args.sort.parse::<SortOption>()?);
    if let Some(category) = args.category {
        query = query.with_category(category);
    }

    let view = ViewContext::new(auth, &cart, &catalog)
        .with_query(query)
        .with_payment_method(args.method.parse::<PaymentMethodKind>()?);
    let page = render_path(&args.path, &view);

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    match args.output {
        Some(path) => {
            std::fs::write(&path, &page.html)
                .with_context(|| format!("Failed to write {}", path))?;
            ctx.output.success(&format!(
                "Rendered {} ({}) to {}",
                page.route, page.status, path
            ));
        }
        None => println!("{}", page.html),
    }
    if page.status != 200 {
        ctx.output.warn(&format!("{} is not a known page", args.path));
    }
    Ok(())
}
