//! Resolution pipeline
//!
//! Turns a free-form location reference into a coordinate plus the nearby
//! catalog listings. Single pass: offline extraction first, then at most
//! one geocoding lookup, then the proximity filter. No retries, no state
//! kept between requests.

use crate::catalog::{Catalog, NearbyListing};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::extract;
use crate::geocode::Geocoder;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// A successful resolution: the query point and the listings around it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub lat: f64,
    pub lng: f64,
    pub nearby: Vec<NearbyListing>,
}

/// Resolves location references against an injected catalog and geocoder
pub struct Resolver {
    catalog: Arc<Catalog>,
    geocoder: Arc<dyn Geocoder>,
    radius_km: f64,
}

impl Resolver {
    /// Create a resolver
    ///
    /// The catalog is read-only for the resolver's lifetime; the geocoder
    /// is only consulted when offline extraction finds nothing.
    pub fn new(catalog: Arc<Catalog>, geocoder: Arc<dyn Geocoder>, radius_km: f64) -> Self {
        Self {
            catalog,
            geocoder,
            radius_km,
        }
    }

    /// Run the full pipeline for one reference
    ///
    /// # Errors
    /// - `InvalidInput` for an empty or whitespace-only reference
    /// - `NoCoordinateFound` when no strategy and no fallback produced a
    ///   coordinate
    /// - `Geocode` when the provider itself failed
    pub async fn resolve(&self, reference: &str) -> Result<Resolution> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(Error::InvalidInput(
                "location reference must not be empty".to_string(),
            ));
        }

        let coords = match extract::extract_coordinates(reference) {
            Some(coords) => coords,
            None => self.geocode_fallback(reference).await?,
        };

        let nearby = self.catalog.nearby_within(coords, self.radius_km);
        debug!(
            lat = coords.lat,
            lng = coords.lng,
            nearby = nearby.len(),
            "resolved reference"
        );

        Ok(Resolution {
            lat: coords.lat,
            lng: coords.lng,
            nearby,
        })
    }

    /// One geocoding lookup for a `/place/` name, first candidate wins
    async fn geocode_fallback(&self, reference: &str) -> Result<Coordinates> {
        let place = extract::extract_place_name(reference).ok_or(Error::NoCoordinateFound)?;

        debug!(place = %place, geocoder = self.geocoder.name(), "falling back to geocoder");
        let candidates = self.geocoder.search(&place).await?;

        let first = candidates.into_iter().next().ok_or(Error::NoCoordinateFound)?;
        Ok(Coordinates::new(first.lat, first.lng))
    }
}
