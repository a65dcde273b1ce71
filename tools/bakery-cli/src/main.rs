//! Bakery CLI - Command line tool for the "Сладкий Дворик" storefront.
//!
//! Commands:
//! - `bakery catalog` - List products, optionally by category
//! - `bakery quote` - Build a cart and price it with delivery
//! - `bakery reviews` - Show customer reviews
//! - `bakery render` - Render the storefront page to HTML
//! - `bakery config` - Manage configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ConfigArgs, QuoteArgs, RenderArgs};

/// Bakery CLI - Browse the catalog, quote carts and render the storefront
#[derive(Parser)]
#[command(name = "bakery")]
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

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog(CatalogArgs),

    /// Price a cart including delivery
    Quote(QuoteArgs),

    /// Show customer reviews
    Reviews,

    /// Render the storefront page as HTML
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Quote(args) => commands::quote::run(args, &ctx),
        Commands::Reviews => commands::reviews::run(&ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
