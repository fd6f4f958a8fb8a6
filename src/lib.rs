//! nearstay: nearby-listing finder
//!
//! A library and CLI tool for resolving free-form location references
//! (map-share URLs, Plus Codes) to coordinates and finding catalog
//! listings within range.
//!
//! ## Features
//!
//! - Offline coordinate extraction (`@lat,lng`, `?q=lat,lng`, Plus Codes)
//! - Geocoding fallback via Nominatim for `/place/` URLs
//! - Haversine proximity filtering over an injected listing catalog
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use nearstay::catalog::Catalog;
//! use nearstay::extract;
//!
//! let coords = extract::extract_coordinates("https://maps.google/maps/@-0.2838,36.0725,15z")
//!     .expect("embedded coordinates");
//!
//! let catalog = Catalog::builtin();
//! let nearby = catalog.nearby_within(coords, 5.0);
//! println!("{} listings within 5 km", nearby.len());
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod extract;
pub mod geocode;
pub mod olc;
pub mod resolve;
pub mod server;

// Re-export commonly used types
pub use catalog::{Catalog, Listing, NearbyListing};
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use resolve::{Resolution, Resolver};
