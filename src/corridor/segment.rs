use crate::geodesy::{distance_3d, GeoPoint, EARTH_RADIUS_M};

/// Below this 3D length (meters) a segment is treated as a single point.
const DEGENERATE_LENGTH_M: f64 = 1e-6;
/// Below this weighted squared length the projection is not attempted.
const DEGENERATE_NORM_SQ: f64 = 1e-10;

/// Straight corridor leg between two geographic endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl Segment {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self { start, end }
    }

    pub fn length_m(&self) -> f64 {
        distance_3d(&self.start, &self.end)
    }

    /// Longitude span wider than half the globe, i.e. the leg would have to
    /// wrap across ±180°. Interpolation does not wrap, so such legs are unreliable.
    pub fn crosses_antimeridian(&self) -> bool {
        (self.end.longitude_deg - self.start.longitude_deg).abs() > 180.0
    }

    pub fn distance_to(&self, point: &GeoPoint) -> f64 {
        point_to_segment_3d(point, &self.start, &self.end)
    }
}

/// Shortest 3D distance in meters from `p` to the segment `a`-`b`.
///
/// The closest-point parameter is found in raw (deg, deg, m) deltas with an
/// inner product weighted {1, cos²φ̄, 1/R²}, φ̄ being the mean latitude of the
/// endpoints. That makes the product proportional to the tangent-plane inner
/// product at the segment midpoint. The final distance is measured with
/// [`distance_3d`] against the interpolated point, so the result is never the
/// projection length itself.
///
/// Segments crossing the antimeridian or reaching the poles are not handled.
pub fn point_to_segment_3d(p: &GeoPoint, a: &GeoPoint, b: &GeoPoint) -> f64 {
    let dist_ap = distance_3d(a, p);
    let dist_ab = distance_3d(a, b);

    if dist_ab < DEGENERATE_LENGTH_M {
        log::debug!("degenerate segment ({} m), using endpoint distance", dist_ab);
        return dist_ap;
    }

    let t = match projection_parameter(p, a, b) {
        Some(t) => t,
        None => {
            log::debug!("segment has no extent in working space, using endpoint distance");
            return dist_ap;
        }
    };

    let closest = a.lerp(b, t);
    distance_3d(p, &closest)
}

/// Foot-of-perpendicular parameter of `p` on `a`-`b`, clamped to [0, 1].
fn projection_parameter(p: &GeoPoint, a: &GeoPoint, b: &GeoPoint) -> Option<f64> {
    let mean_lat = ((a.latitude_deg + b.latitude_deg) / 2.0).to_radians();
    let lon_weight = mean_lat.cos().powi(2);
    let alt_weight = 1.0 / (EARTH_RADIUS_M * EARTH_RADIUS_M);

    let ap = delta(a, p);
    let ab = delta(a, b);

    let dot = ap[0] * ab[0] + ap[1] * ab[1] * lon_weight + ap[2] * ab[2] * alt_weight;
    let ab_norm_sq = ab[0] * ab[0] + ab[1] * ab[1] * lon_weight + ab[2] * ab[2] * alt_weight;

    if ab_norm_sq < DEGENERATE_NORM_SQ {
        return None;
    }

    let t = dot / ab_norm_sq;
    log::trace!("projection parameter t = {}", t);
    Some(t.clamp(0.0, 1.0))
}

fn delta(from: &GeoPoint, to: &GeoPoint) -> [f64; 3] {
    [
        to.latitude_deg - from.latitude_deg,
        to.longitude_deg - from.longitude_deg,
        to.altitude_m - from.altitude_m,
    ]
}
