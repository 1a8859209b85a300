use serde::{Deserialize, Serialize};

use crate::scoring::distribution::LengthBuckets;

/// Lowest score rated `Excellent`.
pub const EXCELLENT_MIN_SCORE: f64 = 80.0;
/// Lowest score rated `Good`.
pub const GOOD_MIN_SCORE: f64 = 60.0;
/// Lowest score rated `Fair`; anything below is `Poor`.
pub const FAIR_MIN_SCORE: f64 = 40.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Rating {
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_MIN_SCORE {
            Rating::Excellent
        } else if score >= GOOD_MIN_SCORE {
            Rating::Good
        } else if score >= FAIR_MIN_SCORE {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Fair => "fair",
            Rating::Poor => "poor",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality summary of one segmentation plus its transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub total_segments: usize,
    pub avg_length: f64,
    pub max_length: usize,
    pub min_length: usize,
    pub length_buckets: LengthBuckets,
    /// Total in `[0, 100]`.
    pub score: f64,
    pub rating: Rating,
    pub segment_score: f64,
    pub content_score: f64,
    pub punctuation_count: usize,
    pub terms_found: usize,
    pub terms_total: usize,
    pub ideal_ratio: f64,
    pub long_ratio: f64,
}

impl QualityReport {
    /// Report for a segmentation with no segments: every count and score is zero.
    pub fn empty(terms_total: usize) -> Self {
        Self {
            total_segments: 0,
            avg_length: 0.0,
            max_length: 0,
            min_length: 0,
            length_buckets: LengthBuckets::default(),
            score: 0.0,
            rating: Rating::from_score(0.0),
            segment_score: 0.0,
            content_score: 0.0,
            punctuation_count: 0,
            terms_found: 0,
            terms_total,
            ideal_ratio: 0.0,
            long_ratio: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_segments == 0
    }

    /// Long plus severely long segments.
    pub fn over_ideal_count(&self) -> usize {
        self.length_buckets.over_ideal()
    }
}
