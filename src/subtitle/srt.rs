//! SubRip (`.srt`) rendering and parsing.
//!
//! Rendering is bit-exact: each cue is the 1-based index, the time range,
//! the text, and a blank line. Timestamps truncate below the millisecond.

use std::fmt::Write as _;

use crate::error::CaptionError;
use crate::models::{Segment, SegmentationResult};

const TIME_SEPARATOR: &str = " --> ";

/// Absorbs binary float error such as `1.001 * 1000.0 == 1000.999...`
/// without ever reaching the next millisecond.
const MS_EPSILON: f64 = 1e-6;

/// `HH:MM:SS,mmm`, truncating sub-millisecond precision. Negative or
/// non-finite inputs render as zero.
pub fn format_timestamp(seconds: f64) -> String {
    let total_ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0 + MS_EPSILON).floor() as u64
    } else {
        0
    };

    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = total_secs / 3600;

    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, ms)
}

/// Render segments as SRT text.
pub fn to_srt(segmentation: &SegmentationResult) -> String {
    render(segmentation, false)
}

/// Like [`to_srt`], but cues from a diarized stream are prefixed with
/// `[speaker] `. Segments without a speaker render unchanged.
pub fn to_srt_with_speakers(segmentation: &SegmentationResult) -> String {
    render(segmentation, true)
}

fn render(segmentation: &SegmentationResult, speakers: bool) -> String {
    let mut out = String::new();
    for (i, segment) in segmentation.iter().enumerate() {
        let prefix = match (&segment.speaker, speakers) {
            (Some(speaker), true) => format!("[{}] ", speaker),
            _ => String::new(),
        };
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "{}\n{}{}{}\n{}{}\n\n",
            i + 1,
            format_timestamp(segment.start),
            TIME_SEPARATOR,
            format_timestamp(segment.end),
            prefix,
            segment.text
        );
    }
    out
}

/// Parse `HH:MM:SS,mmm` (a `.` before the milliseconds is accepted too).
pub fn parse_timestamp(value: &str) -> Option<f64> {
    let value = value.trim();
    let (hms, ms) = value.split_once(|c: char| c == ',' || c == '.').unwrap_or((value, "0"));

    let mut parts = hms.split(':');
    let hours: u64 = parts.next()?.trim().parse().ok()?;
    let mins: u64 = parts.next()?.trim().parse().ok()?;
    let secs: u64 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() || mins >= 60 || secs >= 60 {
        return None;
    }
    if ms.is_empty() || ms.len() > 3 || !ms.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let millis: u64 = format!("{:0<3}", ms).parse().ok()?;

    let total_ms = ((hours * 60 + mins) * 60 + secs) * 1000 + millis;
    Some(total_ms as f64 / 1000.0)
}

/// Parse SRT text into segments. Multi-line cue text is joined with a
/// single space; cues with no text are skipped.
pub fn parse_srt(content: &str) -> Result<SegmentationResult, CaptionError> {
    let content = content.trim_start_matches('\u{feff}');
    let lines: Vec<&str> = content.lines().map(|l| l.trim_end_matches('\r')).collect();

    let mut segments = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].trim().is_empty() {
            i += 1;
            continue;
        }

        let line_no = i + 1;
        if lines[i].trim().parse::<u64>().is_err() {
            return Err(CaptionError::invalid_subtitle(
                line_no,
                format!("expected cue index, found {:?}", lines[i]),
            ));
        }
        i += 1;

        let time_line = lines.get(i).copied().unwrap_or_default();
        let (start, end) = parse_time_range(time_line)
            .ok_or_else(|| CaptionError::invalid_subtitle(i + 1, "expected `start --> end`"))?;
        if end < start {
            return Err(CaptionError::invalid_subtitle(i + 1, "cue ends before it starts"));
        }
        i += 1;

        let mut text_lines = Vec::new();
        while i < lines.len() && !lines[i].trim().is_empty() {
            text_lines.push(lines[i].trim());
            i += 1;
        }

        let text = text_lines.join(" ");
        if !text.is_empty() {
            let mut segment = Segment::new(text, start, end);
            segment.word_count = 0;
            segments.push(segment);
        }
    }

    Ok(SegmentationResult::new(segments))
}

fn parse_time_range(line: &str) -> Option<(f64, f64)> {
    let (start, end) = line.split_once("-->")?;
    // Position settings may follow the end time.
    let end = end.split_whitespace().next()?;
    Some((parse_timestamp(start)?, parse_timestamp(end)?))
}
