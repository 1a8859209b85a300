use serde::{Deserialize, Serialize};

use crate::models::SegmentationResult;
use crate::scoring::config::{LengthBucket, LengthThresholds};

/// Segment counts per length bucket.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LengthBuckets {
    pub too_short: usize,
    pub ideal: usize,
    pub long: usize,
    pub severely_long: usize,
}

impl LengthBuckets {
    pub fn get(&self, bucket: LengthBucket) -> usize {
        match bucket {
            LengthBucket::TooShort => self.too_short,
            LengthBucket::Ideal => self.ideal,
            LengthBucket::Long => self.long,
            LengthBucket::SeverelyLong => self.severely_long,
        }
    }

    fn add(&mut self, bucket: LengthBucket) {
        match bucket {
            LengthBucket::TooShort => self.too_short += 1,
            LengthBucket::Ideal => self.ideal += 1,
            LengthBucket::Long => self.long += 1,
            LengthBucket::SeverelyLong => self.severely_long += 1,
        }
    }

    /// Segments longer than the ideal range.
    pub fn over_ideal(&self) -> usize {
        self.long + self.severely_long
    }

    pub fn total(&self) -> usize {
        self.too_short + self.ideal + self.long + self.severely_long
    }
}

/// Summary statistics over segment lengths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LengthDistribution {
    pub total: usize,
    pub avg_length: f64,
    pub max_length: usize,
    pub min_length: usize,
    pub buckets: LengthBuckets,
}

impl LengthDistribution {
    pub fn from_segments(segmentation: &SegmentationResult, thresholds: &LengthThresholds) -> Self {
        if segmentation.is_empty() {
            return Self::default();
        }

        let mut buckets = LengthBuckets::default();
        let mut sum = 0usize;
        let mut max_length = 0usize;
        let mut min_length = usize::MAX;

        for segment in segmentation {
            buckets.add(thresholds.classify(segment.length));
            sum += segment.length;
            max_length = max_length.max(segment.length);
            min_length = min_length.min(segment.length);
        }

        let total = segmentation.len();
        Self {
            total,
            avg_length: sum as f64 / total as f64,
            max_length,
            min_length,
            buckets,
        }
    }

    pub fn ratio(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }
}
