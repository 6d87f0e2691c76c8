/// Spherical Earth radius used for every distance in the crate.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic position: latitude and longitude in degrees, altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

impl GeoPoint {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// True when lat/lon fall within [-90, 90] / [-180, 180] and altitude is finite.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude_deg)
            && (-180.0..=180.0).contains(&self.longitude_deg)
            && self.altitude_m.is_finite()
    }

    /// Component-wise linear interpolation in (deg, deg, m).
    pub fn lerp(&self, other: &GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            latitude_deg: self.latitude_deg + t * (other.latitude_deg - self.latitude_deg),
            longitude_deg: self.longitude_deg + t * (other.longitude_deg - self.longitude_deg),
            altitude_m: self.altitude_m + t * (other.altitude_m - self.altitude_m),
        }
    }
}
