pub mod config;
pub mod content;
pub mod distribution;
pub mod report;
pub mod rubric;

pub use config::{LengthBucket, LengthThresholds, ScoringConfig, TermGroup};
pub use distribution::{LengthBuckets, LengthDistribution};
pub use report::{QualityReport, Rating};
pub use rubric::score;
