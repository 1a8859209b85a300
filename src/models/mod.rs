pub mod candidate;
pub mod segment;
pub mod word;

pub use candidate::Candidate;
pub use segment::{Segment, SegmentationResult};
pub use word::WordToken;
