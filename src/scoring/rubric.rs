use crate::log_info;
use crate::models::SegmentationResult;
use crate::scoring::config::{ContentWeights, ScoringConfig, SegmentControlWeights};
use crate::scoring::content::{count_punctuation, count_terms};
use crate::scoring::distribution::LengthDistribution;
use crate::scoring::report::{QualityReport, Rating};

const ENABLE_LOGS: bool = true;

/// Score a segmentation and its transcript against the rubric.
///
/// Pure: the same inputs always give the same report. A segmentation with
/// no segments yields [`QualityReport::empty`].
///
/// `config` is not checked here; callers pass one that has passed
/// [`ScoringConfig::validate`] (as `BenchSettings::load`, `Candidate::evaluate`
/// and `run_comparison` do).
pub fn score(
    segmentation: &SegmentationResult,
    full_text: &str,
    config: &ScoringConfig,
) -> QualityReport {
    let terms_total = config.content.terms.len();
    if segmentation.is_empty() {
        return QualityReport::empty(terms_total);
    }

    let dist = LengthDistribution::from_segments(segmentation, &config.thresholds);
    let segment_score = score_segment_control(&dist, &config.segment_control);
    let (content_score, punctuation_count, terms_found) = score_content(full_text, &config.content);

    let total = (segment_score + content_score).clamp(0.0, 100.0);
    let rating = Rating::from_score(total);

    log_info!(
        "Scored {} segments: {:.1} (segments {:.1}, content {:.1}) -> {}",
        dist.total,
        total,
        segment_score,
        content_score,
        rating
    );

    QualityReport {
        total_segments: dist.total,
        avg_length: dist.avg_length,
        max_length: dist.max_length,
        min_length: dist.min_length,
        length_buckets: dist.buckets,
        score: total,
        rating,
        segment_score,
        content_score,
        punctuation_count,
        terms_found,
        terms_total,
        ideal_ratio: dist.ratio(dist.buckets.ideal),
        long_ratio: dist.ratio(dist.buckets.over_ideal()),
    }
}

/// Full credit with no long or severely long segments; each such segment
/// shrinks its share hyperbolically. The ideal share scales with the
/// fraction of ideal-length segments.
fn score_segment_control(dist: &LengthDistribution, weights: &SegmentControlWeights) -> f64 {
    let severe = dist.buckets.severely_long as f64;
    let long = dist.buckets.long as f64;

    let severe_credit = weights.severe_share / (1.0 + weights.severe_decay * severe);
    let long_credit = weights.long_share / (1.0 + weights.long_decay * long);
    let ideal_credit = weights.ideal_share * dist.ratio(dist.buckets.ideal);

    weights.points * (severe_credit + long_credit + ideal_credit)
}

/// Returns (points, punctuation count, terms found).
fn score_content(full_text: &str, weights: &ContentWeights) -> (f64, usize, usize) {
    let punctuation_count = count_punctuation(full_text, &weights.punctuation_marks);
    let punctuation_points =
        (punctuation_count as f64 * weights.points_per_mark).min(weights.punctuation_cap);

    let terms_found = count_terms(full_text, &weights.terms);
    let term_points = if weights.terms.is_empty() {
        0.0
    } else {
        weights.term_points * terms_found as f64 / weights.terms.len() as f64
    };

    (punctuation_points + term_points, punctuation_count, terms_found)
}
