//! Nominatim geocoding provider (OpenStreetMap)
//!
//! Uses the free Nominatim API. Rate limit: 1 request per second
//! (enforced by User-Agent requirement), which the resolution pipeline
//! respects by issuing at most one lookup per request with no retries.

use crate::constants::api::{GEOCODE_TIMEOUT_SECS, NOMINATIM_URL};
use crate::error::{Error, Result};
use crate::geocode::{GeocodeCandidate, Geocoder};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = "nearstay/0.1.0";

/// Nominatim geocoding provider
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

/// Nominatim search response item
///
/// Nominatim returns lat/lon as strings; they are parsed before a
/// candidate is produced, never defaulted.
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimGeocoder {
    /// Create a provider against the public Nominatim instance
    pub fn new() -> Self {
        Self::with_base_url(NOMINATIM_URL)
    }

    /// Create a provider against a specific instance (or test server)
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_settings(base_url, Duration::from_secs(GEOCODE_TIMEOUT_SECS))
    }

    /// Create a provider with an explicit request timeout
    ///
    /// The timeout bounds the whole request so a slow provider cannot
    /// stall a resolution indefinitely.
    pub fn with_settings(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Parse lat/lng strings to f64
    fn parse_coords(lat: &str, lng: &str) -> Result<(f64, f64)> {
        let lat: f64 = lat
            .parse()
            .map_err(|_| Error::Geocode(format!("Invalid latitude: {}", lat)))?;
        let lng: f64 = lng
            .parse()
            .map_err(|_| Error::Geocode(format!("Invalid longitude: {}", lng)))?;
        Ok((lat, lng))
    }
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    fn name(&self) -> &'static str {
        "nominatim"
    }

    async fn search(&self, place: &str) -> Result<Vec<GeocodeCandidate>> {
        let url = format!(
            "{}/search?q={}&format=json",
            self.base_url,
            urlencoding::encode(place)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geocode(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geocode(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| Error::Geocode(format!("Failed to parse Nominatim response: {}", e)))?;

        results
            .into_iter()
            .map(|result| {
                let (lat, lng) = Self::parse_coords(&result.lat, &result.lon)?;
                Ok(GeocodeCandidate {
                    lat,
                    lng,
                    display_name: result.display_name,
                })
            })
            .collect()
    }
}
