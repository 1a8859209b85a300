use serde::{Deserialize, Serialize};

/// One subtitle caption: a contiguous run of word tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub end: f64,
    /// Character count of `text` (not bytes).
    pub length: usize,
    /// Number of word tokens packed into this segment; 0 when parsed from subtitle text.
    #[serde(default)]
    pub word_count: usize,
    /// Speaker of every token in the segment, when the stream is diarized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Segment {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            text,
            start,
            end,
            length,
            word_count: 1,
            speaker: None,
        }
    }

    pub fn with_speaker(mut self, speaker: Option<String>) -> Self {
        self.speaker = speaker;
        self
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub(crate) fn push_word(&mut self, text: &str, end: f64) {
        self.text.push_str(text);
        self.length += text.chars().count();
        self.end = end;
        self.word_count += 1;
    }
}

/// Ordered, non-overlapping segments produced by one builder run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SegmentationResult {
    pub segments: Vec<Segment>,
}

impl SegmentationResult {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// All segment texts in order with no separator.
    pub fn joined_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a SegmentationResult {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_characters_not_bytes() {
        let segment = Segment::new("台積電。", 0.0, 1.0);
        assert_eq!(segment.length, 4);
    }

    #[test]
    fn push_word_extends_text_and_end() {
        let mut segment = Segment::new("Hello", 0.0, 0.4);
        segment.push_word(",", 0.5);
        assert_eq!(segment.text, "Hello,");
        assert_eq!(segment.length, 6);
        assert_eq!(segment.end, 0.5);
        assert_eq!(segment.word_count, 2);
    }
}
