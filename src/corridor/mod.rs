mod segment;

pub use segment::{point_to_segment_3d, Segment};
