pub mod batch;
pub mod error;
pub mod models;
pub mod ranking;
pub mod scoring;
pub mod segmentation;
pub mod settings;
pub mod subtitle;
mod utils;

pub use batch::{run_comparison, CandidateInput, ComparisonSummary};
pub use error::CaptionError;
pub use models::{Candidate, Segment, SegmentationResult, WordToken};
pub use ranking::{rank, BaselineDelta, RankedList};
pub use scoring::{score, QualityReport, Rating, ScoringConfig, TermGroup};
pub use segmentation::{build, should_break, speaker_changed, BoundaryPolicy, SegmentationConfig};
pub use settings::BenchSettings;
