pub mod algorithm;
pub mod boundary;
pub mod config;

pub use algorithm::build;
pub use boundary::{should_break, speaker_changed};
pub use config::{BoundaryPolicy, SegmentationConfig};
