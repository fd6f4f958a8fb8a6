//! Catalog command handler
//!
//! Shows the listing catalog the resolver searches against.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use clap::Args;
use std::path::Path;

/// Catalog command arguments
#[derive(Args)]
pub struct CatalogArgs {
    /// Path to a JSON catalog file (defaults to the configured catalog)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the catalog command
pub fn run(args: CatalogArgs) -> Result<()> {
    let config = Config::load()?;

    let catalog_path = args.catalog.unwrap_or_else(|| config.catalog.path.clone());
    let catalog = if catalog_path.is_empty() {
        Catalog::builtin()
    } else {
        Catalog::load(Path::new(&catalog_path))?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.listings())?);
        return Ok(());
    }

    if catalog_path.is_empty() {
        println!("Catalog: builtin ({} listings)", catalog.len());
    } else {
        println!("Catalog: {} ({} listings)", catalog_path, catalog.len());
    }

    for listing in catalog.listings() {
        println!(
            "  #{:<4} {}  ({}, {})",
            listing.id, listing.title, listing.latitude, listing.longitude
        );
    }

    Ok(())
}
