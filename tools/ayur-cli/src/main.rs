//! AyurCare CLI.
//!
//! Commands:
//! - `ayur schema` - List tables, functions and enums
//! - `ayur catalog` - Browse the herbal marketplace
//! - `ayur programs` - List wellness programs and consultations
//! - `ayur cart-demo` - Build a cart and show its totals
//! - `ayur checkout` - Run a simulated payment
//! - `ayur render` - Render a page to HTML
//! - `ayur config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartDemoArgs, CatalogArgs, CheckoutArgs, ConfigArgs, RenderArgs, SchemaArgs};

/// AyurCare - herbal marketplace and wellness programs
#[derive(Parser)]
#[command(name = "ayur")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log filter, e.g. info or ayur_commerce=debug
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tables, functions and enums
    Schema(SchemaArgs),

    /// Browse the herbal marketplace
    Catalog(CatalogArgs),

    /// List wellness programs and consultations
    Programs,

    /// Build a cart and show its totals
    CartDemo(CartDemoArgs),

    /// Run a simulated payment
    Checkout(CheckoutArgs),

    /// Render a page to HTML
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;
    logging::init(&ctx.config.logging, cli.log_level.as_deref(), cli.verbose);
    tracing::debug!(config = ?ctx.config_path, "configuration loaded");

    let result = match cli.command {
        Commands::Schema(args) => commands::schema::run(args, &ctx).await,
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Programs => commands::programs::run(&ctx).await,
        Commands::CartDemo(args) => commands::cart_demo::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
