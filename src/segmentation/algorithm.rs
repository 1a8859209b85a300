use crate::error::CaptionError;
use crate::models::{Segment, SegmentationResult, WordToken};
use crate::segmentation::boundary::{should_break, speaker_changed};
use crate::segmentation::config::SegmentationConfig;
use crate::{log_debug, log_warn};

const ENABLE_LOGS: bool = true;

/// Pack an ordered word-token stream into subtitle segments.
///
/// Greedy single pass: each non-empty token either joins the open segment or,
/// when the boundary policy says so (or the speaker changes), closes it and
/// opens the next one. The whole input is validated first so a failure never
/// leaves partial output.
pub fn build(
    words: &[WordToken],
    config: &SegmentationConfig,
) -> Result<SegmentationResult, CaptionError> {
    config.validate()?;
    validate_tokens(words)?;

    let mut segments = Vec::new();
    let mut current: Option<Segment> = None;

    for word in words {
        let text = word.trimmed();
        if text.is_empty() {
            continue;
        }

        let Some(open) = current.as_mut() else {
            current = Some(open_segment(text, word));
            continue;
        };

        let candidate = WordToken {
            text: text.to_string(),
            ..word.clone()
        };
        if speaker_changed(open.speaker.as_deref(), &candidate)
            || should_break(&open.text, open.start, &candidate, config)
        {
            log_debug!(
                "Closing segment at {:.3}s ({} chars) before {:?}",
                open.end,
                open.length,
                text
            );
            let done = std::mem::replace(open, open_segment(text, word));
            close_segment(done, config, &mut segments);
        } else {
            open.push_word(text, word.end);
        }
    }

    if let Some(done) = current {
        close_segment(done, config, &mut segments);
    }

    Ok(SegmentationResult::new(segments))
}

fn open_segment(text: &str, word: &WordToken) -> Segment {
    Segment::new(text, word.start, word.end).with_speaker(word.speaker.clone())
}

fn close_segment(segment: Segment, config: &SegmentationConfig, out: &mut Vec<Segment>) {
    if segment.text.is_empty() {
        return;
    }
    if segment.length > config.max_chars && segment.word_count == 1 {
        log_warn!(
            "Single token of {} chars exceeds max_chars {} at {:.3}s; emitting as-is",
            segment.length,
            config.max_chars,
            segment.start
        );
    }
    out.push(segment);
}

/// Reject backwards, non-finite, out-of-order or overlapping timestamps.
fn validate_tokens(words: &[WordToken]) -> Result<(), CaptionError> {
    let mut previous_start = f64::NEG_INFINITY;
    let mut previous_end = f64::NEG_INFINITY;

    for (index, word) in words.iter().enumerate() {
        if !word.start.is_finite() || !word.end.is_finite() {
            return Err(CaptionError::malformed_input(
                index,
                "timestamps must be finite",
            ));
        }
        if word.end < word.start {
            return Err(CaptionError::malformed_input(
                index,
                format!("end {} precedes start {}", word.end, word.start),
            ));
        }
        if word.start < previous_start {
            return Err(CaptionError::malformed_input(
                index,
                format!(
                    "start {} is earlier than previous start {}",
                    word.start, previous_start
                ),
            ));
        }
        if word.start < previous_end {
            return Err(CaptionError::malformed_input(
                index,
                format!(
                    "start {} overlaps previous token ending at {}",
                    word.start, previous_end
                ),
            ));
        }
        previous_start = word.start;
        previous_end = word.end;
    }

    Ok(())
}
