use serde::{Deserialize, Serialize};

use crate::error::CaptionError;

/// Punctuation counted as sentence/clause delimiters in the transcript.
pub const DEFAULT_PUNCTUATION_MARKS: [&str; 8] = ["，", "。", "！", "？", ",", ".", "!", "?"];

const SHARE_TOLERANCE: f64 = 1e-6;

/// Which length bucket a segment falls into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum LengthBucket {
    TooShort,
    Ideal,
    Long,
    SeverelyLong,
}

impl LengthBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthBucket::TooShort => "tooShort",
            LengthBucket::Ideal => "ideal",
            LengthBucket::Long => "long",
            LengthBucket::SeverelyLong => "severelyLong",
        }
    }
}

/// Inclusive character thresholds: `< ideal_min` is too short,
/// `ideal_min..=ideal_max` ideal, `..=long_max` long, anything above severely long.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LengthThresholds {
    pub ideal_min: usize,
    pub ideal_max: usize,
    pub long_max: usize,
}

impl LengthThresholds {
    pub fn classify(&self, length: usize) -> LengthBucket {
        if length < self.ideal_min {
            LengthBucket::TooShort
        } else if length <= self.ideal_max {
            LengthBucket::Ideal
        } else if length <= self.long_max {
            LengthBucket::Long
        } else {
            LengthBucket::SeverelyLong
        }
    }
}

impl Default for LengthThresholds {
    fn default() -> Self {
        Self {
            ideal_min: 15,
            ideal_max: 30,
            long_max: 40,
        }
    }
}

/// Weights of the segment-control sub-score.
///
/// `points * (severe_share / (1 + severe_decay * severe)
///          + long_share / (1 + long_decay * long)
///          + ideal_share * ideal / total)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentControlWeights {
    pub points: f64,
    pub severe_share: f64,
    pub long_share: f64,
    pub ideal_share: f64,
    pub severe_decay: f64,
    pub long_decay: f64,
}

impl SegmentControlWeights {
    fn with_points(points: f64) -> Self {
        Self {
            points,
            severe_share: 0.5,
            long_share: 0.2,
            ideal_share: 0.3,
            severe_decay: 1.0,
            long_decay: 0.5,
        }
    }
}

/// A domain term and its accepted spellings (script or case variants).
/// Finding any variant credits the term once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TermGroup {
    pub name: String,
    pub variants: Vec<String>,
}

impl TermGroup {
    pub fn new<I, S>(name: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }
}

/// Weights of the content sub-score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentWeights {
    pub points_per_mark: f64,
    pub punctuation_cap: f64,
    pub punctuation_marks: Vec<String>,
    /// Shared equally among `terms`; unearned when no terms are configured.
    pub term_points: f64,
    #[serde(default)]
    pub terms: Vec<TermGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    pub thresholds: LengthThresholds,
    pub segment_control: SegmentControlWeights,
    pub content: ContentWeights,
}

impl ScoringConfig {
    /// Segment control 60, punctuation 15, domain terms 25.
    pub fn segment_weighted() -> Self {
        Self {
            thresholds: LengthThresholds::default(),
            segment_control: SegmentControlWeights::with_points(60.0),
            content: ContentWeights {
                points_per_mark: 1.5,
                punctuation_cap: 15.0,
                punctuation_marks: default_marks(),
                term_points: 25.0,
                terms: Vec::new(),
            },
        }
    }

    /// Segment control 50, punctuation 20, domain terms 30.
    pub fn balanced() -> Self {
        Self {
            thresholds: LengthThresholds::default(),
            segment_control: SegmentControlWeights::with_points(50.0),
            content: ContentWeights {
                points_per_mark: 2.0,
                punctuation_cap: 20.0,
                punctuation_marks: default_marks(),
                term_points: 30.0,
                terms: Vec::new(),
            },
        }
    }

    pub fn with_terms(mut self, terms: Vec<TermGroup>) -> Self {
        self.content.terms = terms;
        self
    }

    pub fn validate(&self) -> Result<(), CaptionError> {
        let t = &self.thresholds;
        if t.ideal_min > t.ideal_max || t.ideal_max > t.long_max {
            return Err(CaptionError::invalid_config(format!(
                "length thresholds must satisfy idealMin <= idealMax <= longMax, got {}/{}/{}",
                t.ideal_min, t.ideal_max, t.long_max
            )));
        }

        let w = &self.segment_control;
        let weights = [
            w.points,
            w.severe_share,
            w.long_share,
            w.ideal_share,
            w.severe_decay,
            w.long_decay,
            self.content.points_per_mark,
            self.content.punctuation_cap,
            self.content.term_points,
        ];
        if weights.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(CaptionError::invalid_config(
                "scoring weights must be finite and non-negative",
            ));
        }

        let shares = w.severe_share + w.long_share + w.ideal_share;
        if (shares - 1.0).abs() > SHARE_TOLERANCE {
            return Err(CaptionError::invalid_config(format!(
                "segment-control shares must sum to 1.0, got {}",
                shares
            )));
        }

        if let Some(term) = self.content.terms.iter().find(|t| t.variants.is_empty()) {
            return Err(CaptionError::invalid_config(format!(
                "term '{}' has no variants",
                term.name
            )));
        }

        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::segment_weighted()
    }
}

fn default_marks() -> Vec<String> {
    DEFAULT_PUNCTUATION_MARKS.iter().map(|m| m.to_string()).collect()
}
