use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::error::CaptionError;
use crate::models::{Candidate, WordToken};
use crate::ranking::{rank, BaselineDelta, RankedList};
use crate::settings::BenchSettings;
use crate::subtitle::parse_srt;
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// One provider result as handed over by the adapter layer.
///
/// Either `words` (packed by the segment builder) or `srt` (the provider's
/// own captions) must be present; `words` wins when both are.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInput {
    pub provider_id: String,
    pub config_id: String,
    #[serde(default)]
    pub processing_time: f64,
    #[serde(default)]
    pub words: Vec<WordToken>,
    #[serde(default)]
    pub srt: Option<String>,
    /// Full transcript; defaults to the concatenated word or cue text.
    #[serde(default)]
    pub transcript: Option<String>,
}

impl CandidateInput {
    pub fn evaluate(&self, settings: &BenchSettings) -> Result<Candidate, CaptionError> {
        if !self.words.is_empty() || self.srt.is_none() {
            let transcript = self
                .transcript
                .clone()
                .unwrap_or_else(|| self.words.iter().map(|w| w.trimmed()).collect());
            return Candidate::evaluate(
                &self.provider_id,
                &self.config_id,
                &self.words,
                &transcript,
                &settings.segmentation,
                &settings.scoring,
                self.processing_time,
            );
        }

        let segmentation = parse_srt(self.srt.as_deref().unwrap_or_default())?;
        let transcript = self
            .transcript
            .clone()
            .unwrap_or_else(|| segmentation.joined_text());
        Ok(Candidate::from_segmentation(
            &self.provider_id,
            &self.config_id,
            segmentation,
            &transcript,
            &settings.scoring,
            self.processing_time,
        ))
    }
}

/// Ranked outcome of a benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub generated_at: DateTime<Utc>,
    pub ranked: RankedList,
    pub baseline: Option<String>,
    pub baseline_deltas: Vec<BaselineDelta>,
}

/// Evaluate every input, rank them, and compare against `baseline`
/// (a `provider/config` label) when given. Both configs are validated
/// before any input is touched.
pub fn run_comparison(
    inputs: &[CandidateInput],
    settings: &BenchSettings,
    baseline: Option<&str>,
) -> Result<ComparisonSummary, CaptionError> {
    settings.segmentation.validate()?;
    settings.scoring.validate()?;

    let candidates = inputs
        .iter()
        .map(|input| input.evaluate(settings))
        .collect::<Result<Vec<_>, _>>()?;
    log_info!("Evaluated {} candidates", candidates.len());

    let baseline_candidate = match baseline {
        Some(label) => {
            let found = candidates.iter().find(|c| c.label() == label).cloned();
            if found.is_none() {
                log_warn!("Baseline {} not found among candidates", label);
            }
            found
        }
        None => None,
    };

    let ranked = rank(candidates);
    let baseline_deltas = baseline_candidate
        .as_ref()
        .map(|b| ranked.compare_to(b))
        .unwrap_or_default();

    Ok(ComparisonSummary {
        generated_at: Utc::now(),
        ranked,
        baseline: baseline_candidate.map(|b| b.label()),
        baseline_deltas,
    })
}

impl ComparisonSummary {
    /// Plain-text table for terminals.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Comparison generated {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        for (i, candidate) in self.ranked.iter().enumerate() {
            let report = &candidate.report;
            let _ = writeln!(
                out,
                "{:>2}. {:<32} {:>5.1}  {:<9} segments {:>3}  max {:>3}  long+ {:>2}  {:.2}s",
                i + 1,
                candidate.label(),
                report.score,
                report.rating.as_str(),
                report.total_segments,
                report.max_length,
                report.over_ideal_count(),
                candidate.processing_time
            );
        }

        if let Some(label) = &self.baseline {
            let _ = writeln!(out, "Baseline: {}", label);
            for delta in &self.baseline_deltas {
                let _ = writeln!(
                    out,
                    "  {:<32} {:>+6.1}{}",
                    delta.label,
                    delta.delta,
                    if delta.beats_baseline { "  beats baseline" } else { "" }
                );
            }
        }

        out
    }
}
