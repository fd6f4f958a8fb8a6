//! Geocoding module
//!
//! Resolves a human-readable place name to coordinate candidates via an
//! external provider. Used only as a fallback when offline extraction
//! finds nothing.

pub mod nominatim;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single candidate returned by a geocoding provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Display name (address or description)
    pub display_name: String,
}

/// Trait for geocoding providers
///
/// Object-safe so the server state can hold an `Arc<dyn Geocoder>` and
/// tests can substitute a canned provider.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Provider name, for logs and status output
    fn name(&self) -> &'static str;

    /// Look up a place name, returning candidates in provider order
    ///
    /// An empty list is a normal "nothing found"; transport and protocol
    /// failures are errors.
    async fn search(&self, place: &str) -> Result<Vec<GeocodeCandidate>>;
}

/// Get the default geocoding provider
pub fn default_geocoder() -> nominatim::NominatimGeocoder {
    nominatim::NominatimGeocoder::new()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_serialization() {
        let candidate = GeocodeCandidate {
            lat: -0.2736,
            lng: 36.1121,
            display_name: "Hyrax Hill Museum, Nakuru".to_string(),
        };

        let json = serde_json::to_string(&candidate).unwrap();
        let parsed: GeocodeCandidate = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.lat, -0.2736);
        assert_eq!(parsed.display_name, "Hyrax Hill Museum, Nakuru");
    }
}
