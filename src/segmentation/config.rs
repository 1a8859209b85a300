use serde::{Deserialize, Serialize};

use crate::error::CaptionError;

/// Sentence-final marks recognized by default (CJK full-width and ASCII).
pub const DEFAULT_SENTENCE_MARKS: [&str; 6] = ["。", "！", "？", ".", "!", "?"];

/// Clause marks that allow a soft break once a segment has reached `max_chars`.
pub const DEFAULT_CLAUSE_MARKS: [&str; 5] = ["，", "、", ",", ";", ":"];

/// How far past `max_chars` the punctuation-aware policy lets a segment grow.
pub const DEFAULT_HYSTERESIS: f64 = 1.5;

/// Rule deciding where one segment ends and the next begins.
///
/// The two variants produce different segmentations for the same input and
/// are never substituted for each other implicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BoundaryPolicy {
    /// Break when the appended text would exceed `max_chars`, or when the
    /// segment would span more than `max_duration` seconds.
    LengthDuration,
    /// Break right after a sentence-final mark; otherwise prefer a clause
    /// mark once `max_chars` is reached, and only force a break when the
    /// text would exceed `max_chars * hysteresis`.
    #[serde(rename_all = "camelCase")]
    Punctuation {
        sentence_marks: Vec<String>,
        #[serde(default)]
        clause_marks: Vec<String>,
        hysteresis: f64,
    },
}

impl BoundaryPolicy {
    pub fn punctuation() -> Self {
        Self::Punctuation {
            sentence_marks: DEFAULT_SENTENCE_MARKS.iter().map(|m| m.to_string()).collect(),
            clause_marks: DEFAULT_CLAUSE_MARKS.iter().map(|m| m.to_string()).collect(),
            hysteresis: DEFAULT_HYSTERESIS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BoundaryPolicy::LengthDuration => "length-duration",
            BoundaryPolicy::Punctuation { .. } => "punctuation",
        }
    }
}

/// Packing limits for the segment builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationConfig {
    /// Target maximum characters per caption.
    pub max_chars: usize,

    /// Maximum caption span in seconds; `None` disables the duration limit.
    #[serde(default)]
    pub max_duration: Option<f64>,

    pub policy: BoundaryPolicy,
}

impl SegmentationConfig {
    /// Pure length-based packing with no duration limit.
    pub fn length_only(max_chars: usize) -> Self {
        Self {
            max_chars,
            max_duration: None,
            policy: BoundaryPolicy::LengthDuration,
        }
    }

    /// Length-based packing with a duration ceiling.
    pub fn with_duration(max_chars: usize, max_duration: f64) -> Self {
        Self {
            max_chars,
            max_duration: Some(max_duration),
            policy: BoundaryPolicy::LengthDuration,
        }
    }

    /// Punctuation-first packing with the default mark sets and hysteresis.
    pub fn punctuation_aware(max_chars: usize) -> Self {
        Self {
            max_chars,
            max_duration: None,
            policy: BoundaryPolicy::punctuation(),
        }
    }

    pub fn validate(&self) -> Result<(), CaptionError> {
        if self.max_chars == 0 {
            return Err(CaptionError::invalid_config("max_chars must be positive"));
        }

        if let Some(limit) = self.max_duration {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(CaptionError::invalid_config(format!(
                    "max_duration must be a positive number of seconds, got {}",
                    limit
                )));
            }
        }

        if let BoundaryPolicy::Punctuation {
            sentence_marks,
            hysteresis,
            ..
        } = &self.policy
        {
            if !hysteresis.is_finite() || *hysteresis < 1.0 {
                return Err(CaptionError::invalid_config(format!(
                    "hysteresis must be at least 1.0, got {}",
                    hysteresis
                )));
            }
            if sentence_marks.iter().all(|m| m.is_empty()) {
                return Err(CaptionError::invalid_config(
                    "punctuation policy needs at least one sentence mark",
                ));
            }
        }

        Ok(())
    }
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self::with_duration(18, 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_chars_is_rejected() {
        let err = SegmentationConfig::length_only(0).validate().unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        assert!(SegmentationConfig::with_duration(18, 0.0).validate().is_err());
        assert!(SegmentationConfig::with_duration(18, f64::NAN).validate().is_err());
        assert!(SegmentationConfig::with_duration(18, 2.5).validate().is_ok());
    }

    #[test]
    fn hysteresis_below_one_is_rejected() {
        let mut config = SegmentationConfig::punctuation_aware(20);
        if let BoundaryPolicy::Punctuation { hysteresis, .. } = &mut config.policy {
            *hysteresis = 0.8;
        }
        assert!(config.validate().is_err());
    }

    #[test]
    fn policy_serializes_as_tagged_variant() {
        let config = SegmentationConfig::length_only(25);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["policy"]["kind"], "lengthDuration");
        assert_eq!(json["maxChars"], 25);

        let parsed: SegmentationConfig = serde_json::from_str(
            r#"{"maxChars": 20, "policy": {"kind": "punctuation", "sentenceMarks": ["。"], "hysteresis": 1.5}}"#,
        )
        .unwrap();
        assert_eq!(parsed.max_duration, None);
        assert_eq!(parsed.policy.name(), "punctuation");
    }
}
