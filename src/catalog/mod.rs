//! Listing catalog
//!
//! The set of known listings the proximity filter searches against.
//! Loaded once at startup (builtin defaults or a JSON file) and read-only
//! for the life of the process; the filter only ever reads it.

use crate::coord::distance::haversine_km;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A catalog entry: a listing at a fixed location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: u64,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Listing {
    /// Location of this listing
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A listing paired with its distance from a query point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyListing {
    pub id: u64,
    pub title: String,
    /// Great-circle distance in kilometers, unrounded
    pub distance_km: f64,
}

/// Read-only listing catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Build a catalog from a list of listings
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// The builtin demo catalog (two points near Nakuru)
    pub fn builtin() -> Self {
        Self::new(vec![
            Listing {
                id: 1,
                title: "Kabarak University Town Campus".to_string(),
                latitude: -0.2838,
                longitude: 36.0725,
            },
            Listing {
                id: 2,
                title: "Hyrax Hill Museum".to_string(),
                latitude: -0.2736,
                longitude: 36.1121,
            },
        ])
    }

    /// Load a catalog from a JSON file (an array of listings)
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Catalog(format!("Failed to read {}: {}", path.display(), e)))?;

        let listings: Vec<Listing> = serde_json::from_str(&content)
            .map_err(|e| Error::Catalog(format!("Failed to parse {}: {}", path.display(), e)))?;

        for listing in &listings {
            listing.coordinates().validate().map_err(|e| {
                Error::Catalog(format!("Listing {} ({}): {}", listing.id, listing.title, e))
            })?;
        }

        Ok(Self::new(listings))
    }

    /// All listings, in catalog order
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Number of listings
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Listings within `radius_km` of a point, boundary inclusive
    ///
    /// Results keep catalog order; distances are unrounded. An empty
    /// catalog yields an empty result, not an error.
    pub fn nearby_within(&self, point: Coordinates, radius_km: f64) -> Vec<NearbyListing> {
        self.listings
            .iter()
            .filter_map(|listing| {
                let distance_km = haversine_km(point, listing.coordinates());
                (distance_km <= radius_km).then(|| NearbyListing {
                    id: listing.id,
                    title: listing.title.clone(),
                    distance_km,
                })
            })
            .collect()
    }
}
