mod types;
mod verdict;

pub use types::{Limits, Sample, Verdict};
pub use verdict::evaluate;
