//! Great-circle distance (haversine)

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::coord::Coordinates;
use std::f64::consts::PI;

/// Calculate the distance between two points in kilometers (haversine formula)
///
/// Assumes a spherical Earth with R = 6371 km. Accurate for the
/// short-to-medium distances the proximity filter cares about.
pub fn haversine_km(p1: Coordinates, p2: Coordinates) -> f64 {
    let lat1 = p1.lat * PI / 180.0;
    let lat2 = p2.lat * PI / 180.0;
    let delta_lat = (p2.lat - p1.lat) * PI / 180.0;
    let delta_lng = (p2.lng - p1.lng) * PI / 180.0;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identical_points() {
        let p = Coordinates::new(-0.2838, 36.0725);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // One degree of latitude is R * pi / 180 km, about 111.19 km
        let a = Coordinates::new(0.0, 36.0);
        let b = Coordinates::new(1.0, 36.0);

        let expected = EARTH_RADIUS_KM * PI / 180.0;
        assert_relative_eq!(haversine_km(a, b), expected, max_relative = 1e-9);
    }

    #[test]
    fn test_nakuru_campus_to_hyrax_hill() {
        // The two builtin catalog points are about 4.5 km apart
        let campus = Coordinates::new(-0.2838, 36.0725);
        let hyrax = Coordinates::new(-0.2736, 36.1121);

        let distance = haversine_km(campus, hyrax);
        assert!(
            (distance - 4.55).abs() < 0.1,
            "Distance {} should be approximately 4.55 km",
            distance
        );
    }

    #[test]
    fn test_symmetry() {
        let a = Coordinates::new(-0.2838, 36.0725);
        let b = Coordinates::new(-0.2736, 36.1121);
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

}
