//! CLI command implementations.

pub mod cart_demo;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod programs;
pub mod render;
pub mod schema;

use anyhow::{Context as _, Result};
use ayur_commerce::cart::{Cart, CartItem};
use ayur_commerce::catalog::Catalog;
use ayur_commerce::ids::ItemId;
use ayur_commerce::programs::find_bookable;
use clap::{Args, Subcommand};

/// Items placed in the cart when none are named.
pub const DEFAULT_ITEMS: [&str; 3] = ["herb-1", "herb-4", "program-1"];

/// Arguments for the schema command.
#[derive(Args)]
pub struct SchemaArgs {
    /// Show one table in detail.
    pub table: Option<String>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Match product name or brand.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only this category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// featured, price-asc, price-desc, rating or name.
    #[arg(long, default_value = "featured")]
    pub sort: String,
}

/// Arguments for the cart-demo command.
#[derive(Args)]
pub struct CartDemoArgs {
    /// Item ids to add, in order. Repeats increase the quantity.
    #[arg(short, long = "add")]
    pub items: Vec<String>,

    /// Quantity updates as ID=TEXT, read the way the quantity box reads input.
    #[arg(long = "set")]
    pub quantities: Vec<String>,

    /// Item ids to remove after the updates.
    #[arg(long = "remove")]
    pub remove: Vec<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// card, upi or netbanking.
    #[arg(short, long, default_value = "card")]
    pub method: String,

    /// Item ids to buy.
    #[arg(short, long = "add")]
    pub items: Vec<String>,

    /// UPI id for the upi method.
    #[arg(long)]
    pub vpa: Option<String>,

    /// Bank for net banking.
    #[arg(long)]
    pub bank: Option<String>,

    /// Override the configured processing delay.
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Path to render, e.g. / or /marketplace.
    #[arg(default_value = "/")]
    pub path: String,

    /// Render as if this email were signed in.
    #[arg(long)]
    pub signed_in_as: Option<String>,

    /// Items in the cart.
    #[arg(short, long = "add")]
    pub items: Vec<String>,

    /// Marketplace search text.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Marketplace category.
    #[arg(long)]
    pub category: Option<String>,

    /// Marketplace sort.
    #[arg(long, default_value = "featured")]
    pub sort: String,

    /// Payment method shown on the payment page.
    #[arg(long, default_value = "card")]
    pub method: String,

    /// Write the HTML to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Cart entry for a product, program or consultation id.
pub fn resolve_item(catalog: &Catalog, id: &str) -> Result<CartItem> {
    let id = ItemId::new(id);
    match catalog.get(&id) {
        Ok(product) => Ok(product.to_cart_item()),
        Err(_) => find_bookable(&id).with_context(|| format!("No product, program or consultation with id {}", id)),
    }
}

/// A cart holding `ids`, or the default items when `ids` is empty.
pub fn cart_from_ids(catalog: &Catalog, ids: &[String]) -> Result<Cart> {
    let mut cart = Cart::new();
    let ids: Vec<&str> = if ids.is_empty() {
        DEFAULT_ITEMS.to_vec()
    } else {
        ids.iter().map(String::as_str).collect()
    };
    for id in ids {
        cart.add_item(resolve_item(catalog, id)?)?;
    }
    Ok(cart)
}
