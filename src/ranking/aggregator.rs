use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::log_info;
use crate::models::Candidate;

const ENABLE_LOGS: bool = true;

/// Candidates ordered best first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedList {
    pub entries: Vec<Candidate>,
}

/// Score difference between a ranked candidate and the baseline to beat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BaselineDelta {
    pub rank: usize,
    pub label: String,
    pub score: f64,
    pub delta: f64,
    pub beats_baseline: bool,
}

/// Order candidates by score, best first.
///
/// Ties go to fewer long-or-worse segments, then to lower processing time;
/// anything still tied keeps its input order.
pub fn rank(candidates: Vec<Candidate>) -> RankedList {
    let mut entries = candidates;
    entries.sort_by(compare_candidates);

    if let Some(best) = entries.first() {
        log_info!(
            "Ranked {} candidates; best is {} at {:.1}",
            entries.len(),
            best.label(),
            best.report.score
        );
    }

    RankedList { entries }
}

fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.report
        .score
        .total_cmp(&a.report.score)
        .then_with(|| a.report.over_ideal_count().cmp(&b.report.over_ideal_count()))
        .then_with(|| a.processing_time.total_cmp(&b.processing_time))
}

impl RankedList {
    pub fn winner(&self) -> Option<&Candidate> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.entries.iter()
    }

    /// 1-based position of the candidate with this provider and config.
    pub fn position_of(&self, provider_id: &str, config_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|c| c.provider_id == provider_id && c.config_id == config_id)
            .map(|i| i + 1)
    }

    /// Score deltas of every entry against an explicit baseline candidate.
    /// The baseline need not be part of the list.
    pub fn compare_to(&self, baseline: &Candidate) -> Vec<BaselineDelta> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                let delta = candidate.report.score - baseline.report.score;
                BaselineDelta {
                    rank: i + 1,
                    label: candidate.label(),
                    score: candidate.report.score,
                    delta,
                    beats_baseline: compare_candidates(candidate, baseline) == Ordering::Less,
                }
            })
            .collect()
    }
}
