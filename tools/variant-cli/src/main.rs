//! Variants CLI - inspect what each storefront surface shows for a product.
//!
//! Commands:
//! - `variants card` - Customer grid cards
//! - `variants page` - Product page for a color/variant/size selection
//! - `variants admin` - Admin console rows
//! - `variants audit` - Data-shape issues per product

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AdminArgs, AuditArgs, CardArgs, PageArgs};

/// Variants CLI - Derive storefront display values from product payloads
#[derive(Parser)]
#[command(name = "variants")]
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
    /// Show products as customer grid cards
    Card(CardArgs),

    /// Show a product page for a selection
    Page(PageArgs),

    /// Show products as admin console rows
    Admin(AdminArgs),

    /// Report data-shape issues
    Audit(AuditArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Card(args) => commands::card::run(args, &ctx),
        Commands::Page(args) => commands::page::run(args, &ctx),
        Commands::Admin(args) => commands::admin::run(args, &ctx),
        Commands::Audit(args) => commands::audit::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
