//! Centralized constants for the nearstay crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers (spherical approximation)
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Radius within which a catalog listing counts as "nearby" (km)
    pub const NEARBY_RADIUS_KM: f64 = 5.0;
}

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// Timeout for a single geocoding request, in seconds
    pub const GEOCODE_TIMEOUT_SECS: u64 = 5;
}
