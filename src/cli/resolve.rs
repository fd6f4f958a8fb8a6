//! Resolve command handler
//!
//! One-shot run of the resolution pipeline from the command line.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::geocode::nominatim::NominatimGeocoder;
use crate::resolve::{Resolution, Resolver};
use clap::Args;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Resolve command arguments
#[derive(Args)]
pub struct ResolveArgs {
    /// Location reference: a map-share URL or Plus Code
    pub reference: String,

    /// Nearby radius in kilometers
    #[arg(long, short = 'r')]
    pub radius: Option<f64>,

    /// Output format: text or json
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Path to a JSON catalog file (defaults to the configured catalog)
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Run the resolve command
pub async fn run(args: ResolveArgs) -> Result<()> {
    let config = Config::load()?;

    let catalog_path = args.catalog.unwrap_or_else(|| config.catalog.path.clone());
    let catalog = if catalog_path.is_empty() {
        Catalog::builtin()
    } else {
        Catalog::load(Path::new(&catalog_path))?
    };

    let geocoder = NominatimGeocoder::with_settings(
        &config.geocoder.base_url,
        Duration::from_secs(config.geocoder.timeout_secs),
    );

    let radius_km = args.radius.unwrap_or(config.nearby.radius_km);
    let resolver = Resolver::new(Arc::new(catalog), Arc::new(geocoder), radius_km);

    let resolution = resolver.resolve(&args.reference).await?;

    let format = args.format.unwrap_or_else(|| config.nearby.format.clone());
    match format.as_str() {
        "json" => print_json(&resolution)?,
        "text" => print_text(&resolution, radius_km),
        other => {
            return Err(Error::Config(format!(
                "Unknown format: {} (expected text or json)",
                other
            )));
        }
    }

    Ok(())
}

fn print_json(resolution: &Resolution) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(resolution)?);
    Ok(())
}

fn print_text(resolution: &Resolution, radius_km: f64) {
    println!("Resolved: {}, {}", resolution.lat, resolution.lng);

    if resolution.nearby.is_empty() {
        println!("No listings within {} km", radius_km);
        return;
    }

    println!("Listings within {} km:", radius_km);
    for listing in &resolution.nearby {
        println!("  {:>5.2} km  {} (#{})", listing.distance_km, listing.title, listing.id);
    }
}
