mod distance;
mod point;

pub use distance::{distance_3d, horizontal_distance};
pub use point::{GeoPoint, EARTH_RADIUS_M};
