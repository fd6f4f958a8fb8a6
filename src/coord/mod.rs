//! Coordinate types and distance math
//!
//! This module handles:
//! - The `Coordinates` pair used across the resolution pipeline
//! - Range validation (a coordinate is only ever built from parsed numbers)
//! - Haversine great-circle distance

pub mod distance;

use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create coordinates only if both values are in range
    ///
    /// Extraction strategies use this so that an out-of-range capture
    /// becomes "no result" instead of a bogus coordinate.
    pub fn checked(lat: f64, lng: f64) -> Option<Self> {
        let coords = Self { lat, lng };
        coords.validate().ok().map(|_| coords)
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lng < -180.0 || self.lng > 180.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_in_range() {
        assert!(Coordinates::new(-0.2838, 36.0725).validate().is_ok());
        assert!(Coordinates::new(90.0, 180.0).validate().is_ok());
        assert!(Coordinates::new(-90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        assert!(Coordinates::new(91.0, 0.0).validate().is_err());
        assert!(Coordinates::new(-91.0, 0.0).validate().is_err());
        assert!(Coordinates::new(0.0, 181.0).validate().is_err());
        assert!(Coordinates::new(0.0, -181.0).validate().is_err());
    }

    #[test]
    fn test_checked() {
        assert!(Coordinates::checked(-0.2838, 36.0725).is_some());
        assert!(Coordinates::checked(999.0, 36.0725).is_none());
    }

    #[test]
    fn test_serialization() {
        let coords = Coordinates::new(-0.2838, 36.0725);
        let json = serde_json::to_string(&coords).unwrap();
        let parsed: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, coords);
    }
}
