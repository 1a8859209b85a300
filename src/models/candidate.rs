use serde::{Deserialize, Serialize};

use crate::error::CaptionError;
use crate::models::{SegmentationResult, WordToken};
use crate::scoring::{score, QualityReport, ScoringConfig};
use crate::segmentation::{build, SegmentationConfig};

/// One (provider, configuration) result under comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub provider_id: String,
    pub config_id: String,
    pub segmentation: SegmentationResult,
    pub report: QualityReport,
    /// Seconds the provider took to produce the transcript.
    pub processing_time: f64,
}

impl Candidate {
    /// Validate both configs, pack `words`, score the result against
    /// `full_text`, and wrap both.
    pub fn evaluate(
        provider_id: impl Into<String>,
        config_id: impl Into<String>,
        words: &[WordToken],
        full_text: &str,
        segmentation_config: &SegmentationConfig,
        scoring_config: &ScoringConfig,
        processing_time: f64,
    ) -> Result<Self, CaptionError> {
        scoring_config.validate()?;
        let segmentation = build(words, segmentation_config)?;
        Ok(Self::from_segmentation(
            provider_id,
            config_id,
            segmentation,
            full_text,
            scoring_config,
            processing_time,
        ))
    }

    /// Score an already segmented result, e.g. a provider's own captions.
    /// `scoring_config` is assumed valid.
    pub fn from_segmentation(
        provider_id: impl Into<String>,
        config_id: impl Into<String>,
        segmentation: SegmentationResult,
        full_text: &str,
        scoring_config: &ScoringConfig,
        processing_time: f64,
    ) -> Self {
        let report = score(&segmentation, full_text, scoring_config);
        Self {
            provider_id: provider_id.into(),
            config_id: config_id.into(),
            segmentation,
            report,
            processing_time,
        }
    }

    /// `provider/config`, used in logs and summaries.
    pub fn label(&self) -> String {
        format!("{}/{}", self.provider_id, self.config_id)
    }
}
