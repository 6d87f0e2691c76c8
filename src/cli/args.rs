use clap::Parser;

use corridor_check::{GeoPoint, Limits, Sample, Segment};

use super::error::parse_real;
use super::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "corridor-check")]
#[command(about = "Check one trajectory sample against an air corridor segment")]
#[command(version)]
pub struct Cli {
    /// Trajectory point latitude (deg)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub traj_lat: f64,
    /// Trajectory point longitude (deg)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub traj_lon: f64,
    /// Trajectory point altitude (m)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub traj_alt: f64,
    /// Trajectory point speed (km/h)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub traj_speed: f64,
    /// Corridor segment start latitude (deg)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub seg_start_lat: f64,
    /// Corridor segment start longitude (deg)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub seg_start_lon: f64,
    /// Corridor segment start altitude (m)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub seg_start_alt: f64,
    /// Corridor segment end latitude (deg)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub seg_end_lat: f64,
    /// Corridor segment end longitude (deg)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub seg_end_lon: f64,
    /// Corridor segment end altitude (m)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub seg_end_alt: f64,
    /// Maximum allowed deviation from the segment (m)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub allowed_deviation: f64,
    /// Maximum allowed speed (km/h)
    #[arg(allow_hyphen_values = true, value_parser = parse_real)]
    pub allowed_speed: f64,

    /// Result format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    pub fn sample(&self) -> Sample {
        Sample {
            point: GeoPoint::new(self.traj_lat, self.traj_lon, self.traj_alt),
            speed_kmh: self.traj_speed,
        }
    }

    pub fn segment(&self) -> Segment {
        Segment::new(
            GeoPoint::new(self.seg_start_lat, self.seg_start_lon, self.seg_start_alt),
            GeoPoint::new(self.seg_end_lat, self.seg_end_lon, self.seg_end_alt),
        )
    }

    pub fn limits(&self) -> Limits {
        Limits {
            allowed_deviation_m: self.allowed_deviation,
            allowed_speed_kmh: self.allowed_speed,
        }
    }
}
