//! Server shared state
//!
//! Holds configuration, the read-only catalog, and the geocoding provider
//! for the HTTP server. The catalog never changes after startup, so no
//! locking is needed.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::geocode::{nominatim::NominatimGeocoder, Geocoder};
use crate::resolve::Resolver;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// The catalog being searched
    pub catalog: Arc<Catalog>,

    /// Name of the geocoding provider, for status output
    pub geocoder_name: &'static str,

    /// The resolution pipeline
    resolver: Resolver,
}

impl AppState {
    /// Create application state from configuration
    ///
    /// Loads the catalog named by the config (or the builtin one) and
    /// wires up the Nominatim provider. Catalog errors surface here, at
    /// startup, not per-request.
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = if config.catalog.path.is_empty() {
            Catalog::builtin()
        } else {
            Catalog::load(Path::new(&config.catalog.path))?
        };

        let geocoder = NominatimGeocoder::with_settings(
            &config.geocoder.base_url,
            Duration::from_secs(config.geocoder.timeout_secs),
        );

        Ok(Self::with_parts(config, Arc::new(catalog), Arc::new(geocoder)))
    }

    /// Create application state from explicit parts
    ///
    /// Useful for tests that substitute the catalog or the geocoder.
    pub fn with_parts(
        config: Config,
        catalog: Arc<Catalog>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        let geocoder_name = geocoder.name();
        let resolver = Resolver::new(catalog.clone(), geocoder, config.nearby.radius_km);

        Self {
            config,
            catalog,
            geocoder_name,
            resolver,
        }
    }

    /// The resolution pipeline
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }
}
