use serde::Serialize;

use crate::geodesy::GeoPoint;

/// One trajectory observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub point: GeoPoint,
    pub speed_kmh: f64,
}

/// Tolerances attached to a corridor segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub allowed_deviation_m: f64,
    pub allowed_speed_kmh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    #[serde(rename = "deviation")]
    pub deviation_m: f64,
    #[serde(rename = "speed_violation")]
    pub speed_violation_kmh: f64,
    pub is_compliant: bool,
}
