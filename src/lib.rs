//! Air corridor conformance for a single trajectory sample.
//!
//! The kernel works on plain `f64` values and returns full precision; the
//! binary only adds argument parsing and two-decimal rendering.

pub mod compliance;
pub mod corridor;
pub mod geodesy;

pub use compliance::{evaluate, Limits, Sample, Verdict};
pub use corridor::{point_to_segment_3d, Segment};
pub use geodesy::{distance_3d, horizontal_distance, GeoPoint, EARTH_RADIUS_M};
