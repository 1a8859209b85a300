use crate::models::WordToken;
use crate::segmentation::config::{BoundaryPolicy, SegmentationConfig};

/// Decide whether `candidate` must open a new segment instead of joining the
/// open one whose text is `current_text` and which started at `current_start`.
///
/// `candidate.text` is expected to be trimmed already.
pub fn should_break(
    current_text: &str,
    current_start: f64,
    candidate: &WordToken,
    config: &SegmentationConfig,
) -> bool {
    match &config.policy {
        BoundaryPolicy::LengthDuration => {
            exceeds_limits(current_text, current_start, candidate, config.max_chars, config)
        }
        BoundaryPolicy::Punctuation {
            sentence_marks,
            clause_marks,
            hysteresis,
        } => {
            if ends_with_any(current_text, sentence_marks) {
                return true;
            }

            let current_len = current_text.chars().count();
            if current_len > config.max_chars && ends_with_any(current_text, clause_marks) {
                return true;
            }

            let stretched = (config.max_chars as f64 * hysteresis).floor() as usize;
            exceeds_limits(current_text, current_start, candidate, stretched, config)
        }
    }
}

/// A diarized stream closes the open segment whenever the speaker label
/// changes, under either policy. Unlabelled tokens count as their own speaker.
pub fn speaker_changed(current_speaker: Option<&str>, candidate: &WordToken) -> bool {
    current_speaker != candidate.speaker.as_deref()
}

/// Length/duration check shared by both policies.
fn exceeds_limits(
    current_text: &str,
    current_start: f64,
    candidate: &WordToken,
    char_limit: usize,
    config: &SegmentationConfig,
) -> bool {
    let combined = current_text.chars().count() + candidate.text.chars().count();
    if combined > char_limit {
        return true;
    }

    match config.max_duration {
        Some(limit) => candidate.end - current_start > limit,
        None => false,
    }
}

fn ends_with_any(text: &str, marks: &[String]) -> bool {
    marks
        .iter()
        .any(|mark| !mark.is_empty() && text.ends_with(mark.as_str()))
}
