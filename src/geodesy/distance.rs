use super::point::{GeoPoint, EARTH_RADIUS_M};

/// Great-circle distance in meters between two (lat, lon) pairs in degrees.
pub fn horizontal_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let half_dlat = (lat2 - lat1).to_radians() / 2.0;
    let half_dlon = (lon2 - lon1).to_radians() / 2.0;

    let a = half_dlat.sin().powi(2) + lat1_rad.cos() * lat2_rad.cos() * half_dlon.sin().powi(2);

    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

/// Straight-line combination of the haversine distance and the altitude delta.
///
/// Altitude is treated as a flat offset above the sphere, which holds for
/// corridor-scale separations.
pub fn distance_3d(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let horizontal = horizontal_distance(
        a.latitude_deg,
        a.longitude_deg,
        b.latitude_deg,
        b.longitude_deg,
    );
    let vertical = (b.altitude_m - a.altitude_m).abs();
    horizontal.hypot(vertical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(horizontal_distance(50.0, 10.0, 50.0, 10.0), 0.0);
        assert_eq!(horizontal_distance(-33.9, 18.4, -33.9, 18.4), 0.0);
    }

    #[test]
    fn symmetric() {
        let d1 = horizontal_distance(51.5, -0.1, 40.7, -74.0);
        let d2 = horizontal_distance(40.7, -74.0, 51.5, -0.1);
        assert!((d1 - d2).abs() < 1e-6);
    }

    #[test]
    fn half_circumference() {
        let d = horizontal_distance(0.0, 0.0, 0.0, 180.0);
        assert!((d - PI * EARTH_RADIUS_M).abs() < 1e-3);
        assert!((d - 2.0015e7).abs() < 1e4);
    }

    #[test]
    fn one_degree_at_equator() {
        let d = horizontal_distance(0.0, 0.0, 0.0, 1.0);
        assert!((d / 1000.0 - 111.19).abs() < 0.1);
    }

    #[test]
    fn altitude_only() {
        let a = GeoPoint::new(50.0, 10.0, 1000.0);
        let b = GeoPoint::new(50.0, 10.0, 2000.0);
        assert!((distance_3d(&a, &b) - 1000.0).abs() < 1e-9);
        assert!((distance_3d(&b, &a) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn combines_horizontal_and_vertical() {
        let a = GeoPoint::new(0.0, 0.0, 0.0);
        let b = GeoPoint::new(0.0, 0.01, 500.0);
        let h = horizontal_distance(0.0, 0.0, 0.0, 0.01);
        let expected = (h * h + 500.0 * 500.0).sqrt();
        assert!((distance_3d(&a, &b) - expected).abs() < 1e-6);
    }
}
