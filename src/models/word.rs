use serde::{Deserialize, Serialize};

/// A single recognized unit of speech, already normalized by the provider adapter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordToken {
    pub text: String,
    /// Seconds from the start of the audio.
    pub start: f64,
    /// Seconds from the start of the audio; never earlier than `start` in a valid stream.
    pub end: f64,
    /// Diarization label from providers that separate speakers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl WordToken {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            speaker: None,
        }
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Text with surrounding whitespace removed, as used for packing.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn char_count(&self) -> usize {
        self.trimmed().chars().count()
    }
}
