//! Walk a cart through adds, quantity edits and removals.

use anyhow::{bail, Result};
use ayur_commerce::catalog::Catalog;
use ayur_commerce::checkout::OrderSummary;
use ayur_commerce::ids::ItemId;

use super::{cart_from_ids, CartDemoArgs};
use crate::context::Context;

/// Run the cart-demo command.
pub async fn run(args: CartDemoArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::default_catalog();
    let mut cart = cart_from_ids(&catalog, &args.items)?;

    for update in &args.quantities {
        let Some((id, input)) = update.split_once('=') else {
            bail!("Expected ID=QUANTITY, got {}", update);
        };
        if !cart.set_quantity_input(&ItemId::new(id), input) {
            ctx.output.warn(&format!("{} is not in the cart", id));
        }
    }
    for id in &args.remove {
        if !cart.remove_item(&ItemId::new(id.as_str())) {
            ctx.output.warn(&format!("{} is not in the cart", id));
        }
    }

    let summary = OrderSummary::with_tax_percent(&cart, ctx.config.checkout.tax_percent)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "cart": cart, "summary": summary }));
        return Ok(());
    }

    ctx.output.header(&format!("Shopping Cart ({} items)", cart.total_items()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }
    let rows = cart
        .items()
        .iter()
        .map(|item| -> Result<Vec<String>> {
            Ok(vec![
                item.name.clone(),
                item.quantity.to_string(),
                item.price.display(),
                item.line_total()?.display(),
            ])
        })
        .collect::<Result<Vec<_>>>()?;
    ctx.output.table(&["ITEM", "QTY", "PRICE", "LINE"], &rows);
    ctx.output.kv("subtotal", &summary.subtotal.display());
    ctx.output.kv("shipping", &summary.shipping_label());
    ctx.output.kv("tax", &summary.tax.display());
    ctx.output.kv("total", &summary.total.display());
    Ok(())
}
