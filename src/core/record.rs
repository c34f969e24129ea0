use serde::{Deserialize, Serialize};

/// One reading to score: a prompt, what was heard, and how long it took
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// Identifier carried through to output rows (if the dataset has one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Text the reader was asked to read
    pub prompt: String,

    /// Speech-recognition transcript of the reading
    pub asr_transcript: String,

    /// Human transcript of the same reading, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_transcript: Option<String>,

    /// Scored reading time in seconds
    pub duration_seconds: f64,

    /// Human-graded words correct per minute, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_wcpm: Option<f64>,
}

impl ReadingRecord {
    pub fn new(
        prompt: impl Into<String>,
        asr_transcript: impl Into<String>,
        duration_seconds: f64,
    ) -> Self {
        Self {
            id: None,
            prompt: prompt.into(),
            asr_transcript: asr_transcript.into(),
            human_transcript: None,
            duration_seconds,
            human_wcpm: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_human_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.human_transcript = Some(transcript.into());
        self
    }

    #[must_use]
    pub fn with_human_wcpm(mut self, wcpm: f64) -> Self {
        self.human_wcpm = Some(wcpm);
        self
    }
}
