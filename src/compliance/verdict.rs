use crate::compliance::types::{Limits, Sample, Verdict};
use crate::corridor::Segment;

/// Check one sample against one corridor segment.
///
/// Never fails: NaN inputs come back as NaN deviation / speed violation and a
/// non-compliant verdict.
pub fn evaluate(sample: &Sample, segment: &Segment, limits: &Limits) -> Verdict {
    let deviation_m = segment.distance_to(&sample.point);
    let speed_violation_kmh = speed_excess(sample.speed_kmh, limits.allowed_speed_kmh);
    let is_compliant = deviation_m <= limits.allowed_deviation_m
        && sample.speed_kmh <= limits.allowed_speed_kmh;

    log::debug!(
        "deviation {} m (allowed {}), speed {} km/h (allowed {}), compliant: {}",
        deviation_m,
        limits.allowed_deviation_m,
        sample.speed_kmh,
        limits.allowed_speed_kmh,
        is_compliant
    );

    Verdict {
        deviation_m,
        speed_violation_kmh,
        is_compliant,
    }
}

fn speed_excess(speed_kmh: f64, allowed_kmh: f64) -> f64 {
    let excess = speed_kmh - allowed_kmh;
    // f64::max would swallow NaN
    if excess > 0.0 || excess.is_nan() {
        excess
    } else {
        0.0
    }
}
