mod args;
mod error;
mod output;

pub use args::Cli;
pub use error::AppError;
pub use output::render;

use corridor_check::{Sample, Segment};

/// Log inputs the kernel will accept but cannot treat reliably.
pub fn warn_on_suspect_input(sample: &Sample, segment: &Segment) {
    let points = [
        ("trajectory point", &sample.point),
        ("segment start", &segment.start),
        ("segment end", &segment.end),
    ];
    for (label, point) in points {
        if !point.in_range() {
            log::warn!(
                "{} out of range: lat {}, lon {}, alt {}",
                label,
                point.latitude_deg,
                point.longitude_deg,
                point.altitude_m
            );
        }
    }

    if segment.crosses_antimeridian() {
        log::warn!(
            "segment spans {} degrees of longitude; crossing the antimeridian is not supported",
            (segment.end.longitude_deg - segment.start.longitude_deg).abs()
        );
    }
}
