//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod catalog;
pub mod config;
pub mod resolve;
pub mod serve;

use clap::{Parser, Subcommand};

/// Nearby-listing finder
#[derive(Parser)]
#[command(name = "nearstay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a location reference and list nearby listings
    Resolve(resolve::ResolveArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Show the listing catalog in use
    Catalog(catalog::CatalogArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve(args) => resolve::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Catalog(args) => catalog::run(args),
        Commands::Config(args) => config::run(args),
    }
}
