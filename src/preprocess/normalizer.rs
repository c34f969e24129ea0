use serde::Deserialize;
use thiserror::Error;

use crate::config::NormalizerConfig;
use crate::preprocess::numbers::numbers_to_words;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Invalid ASR segment list: {0}")]
    AsrSegments(#[from] serde_json::Error),
}

/// A text cleanup step, in the order steps are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizeStep {
    /// Rebuild a plain transcript from recognizer segments (transcript only)
    AsrStringRecomposition,
    ToLowercase,
    ConvertNum2words,
    RemovePunctuation,
}

impl NormalizeStep {
    /// All steps in application order
    pub const ORDER: [Self; 4] = [
        Self::AsrStringRecomposition,
        Self::ToLowercase,
        Self::ConvertNum2words,
        Self::RemovePunctuation,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AsrStringRecomposition => "asr_string_recomposition",
            Self::ToLowercase => "to_lowercase",
            Self::ConvertNum2words => "convert_num2words",
            Self::RemovePunctuation => "remove_punctuation",
        }
    }

    /// Whether this step rewrites the prompt and human transcript as well as the
    /// recognizer transcript
    #[must_use]
    pub fn applies_to_all_texts(self) -> bool {
        self != Self::AsrStringRecomposition
    }

    fn enabled_in(self, config: &NormalizerConfig) -> bool {
        match self {
            Self::AsrStringRecomposition => config.asr_string_recomposition,
            Self::ToLowercase => config.to_lowercase,
            Self::ConvertNum2words => config.convert_num2words,
            Self::RemovePunctuation => config.remove_punctuation,
        }
    }
}

impl std::fmt::Display for NormalizeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl NormalizerConfig {
    /// Enabled steps in application order
    #[must_use]
    pub fn enabled_steps(&self) -> Vec<NormalizeStep> {
        NormalizeStep::ORDER
            .into_iter()
            .filter(|step| step.enabled_in(self))
            .collect()
    }
}

/// Cleans raw prompt and transcript text into whitespace-separated tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    #[must_use]
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a prompt or human transcript.
    ///
    /// Runs every enabled step except ASR recomposition.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        let mut text = text.to_string();
        for step in self.config.enabled_steps() {
            if step.applies_to_all_texts() {
                text = apply_text_step(step, &text);
            }
        }
        text
    }

    /// Normalize a speech-recognition transcript, recomposing it from segments
    /// first when enabled.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::AsrSegments` if recomposition is enabled and the
    /// transcript is not a JSON list of `{"text": ...}` segments.
    pub fn normalize_transcript(&self, raw: &str) -> Result<String, NormalizeError> {
        if self.config.asr_string_recomposition {
            Ok(self.normalize(&recompose_asr_segments(raw)?))
        } else {
            Ok(self.normalize(raw))
        }
    }
}

/// Apply one step to one text.
///
/// # Errors
///
/// Returns `NormalizeError::AsrSegments` if the step is ASR recomposition and the
/// text is not a valid segment list.
pub fn apply_step(step: NormalizeStep, text: &str) -> Result<String, NormalizeError> {
    match step {
        NormalizeStep::AsrStringRecomposition => recompose_asr_segments(text),
        _ => Ok(apply_text_step(step, text)),
    }
}

fn apply_text_step(step: NormalizeStep, text: &str) -> String {
    match step {
        NormalizeStep::AsrStringRecomposition => text.to_string(),
        NormalizeStep::ToLowercase => text.to_lowercase(),
        NormalizeStep::ConvertNum2words => numbers_to_words(text),
        NormalizeStep::RemovePunctuation => remove_punctuation(text),
    }
}

#[derive(Deserialize)]
struct AsrSegment {
    text: String,
}

/// Join the texts of a JSON list of recognizer segments with single spaces.
///
/// Extra segment fields (timings, confidences) are ignored. A blank input is an
/// empty transcript.
///
/// # Errors
///
/// Returns `NormalizeError::AsrSegments` if the input is not a JSON list of
/// objects with a string `text` field.
pub fn recompose_asr_segments(raw: &str) -> Result<String, NormalizeError> {
    if raw.trim().is_empty() {
        return Ok(String::new());
    }
    let segments: Vec<AsrSegment> = serde_json::from_str(raw)?;
    Ok(segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Replace ASCII punctuation with spaces and collapse whitespace
#[must_use]
pub fn remove_punctuation(text: &str) -> String {
    let spaced: String = text
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.normalize("The Cat sat on 2 mats, didn't it?"),
            "the cat sat on two mats didn t it"
        );
    }

    #[test]
    fn test_numbers_before_punctuation() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("It cost 1,500."), "it cost one thousand five hundred");
    }

    #[test]
    fn test_disabled_steps() {
        let normalizer = TextNormalizer::new(NormalizerConfig {
            to_lowercase: false,
            convert_num2words: false,
            ..Default::default()
        });
        assert_eq!(normalizer.normalize("Hello, 42 World!"), "Hello 42 World");
    }

    #[test]
    fn test_enabled_steps_order() {
        let config = NormalizerConfig {
            asr_string_recomposition: true,
            ..Default::default()
        };
        assert_eq!(config.enabled_steps(), NormalizeStep::ORDER.to_vec());

        let config = NormalizerConfig {
            to_lowercase: false,
            ..Default::default()
        };
        assert_eq!(
            config.enabled_steps(),
            vec![NormalizeStep::ConvertNum2words, NormalizeStep::RemovePunctuation]
        );
    }

    #[test]
    fn test_recompose_asr_segments() {
        let raw = r#"[{"text": "Once upon", "start": 0.1}, {"text": "a time", "start": 1.2}]"#;
        assert_eq!(recompose_asr_segments(raw).unwrap(), "Once upon a time");
        assert_eq!(recompose_asr_segments("  ").unwrap(), "");
        assert!(recompose_asr_segments("once upon a time").is_err());
    }

    #[test]
    fn test_normalize_transcript_with_segments() {
        let normalizer = TextNormalizer::new(NormalizerConfig {
            asr_string_recomposition: true,
            ..Default::default()
        });
        let raw = r#"[{"text": "Once,"}, {"text": "upon 1 time"}]"#;
        assert_eq!(
            normalizer.normalize_transcript(raw).unwrap(),
            "once upon one time"
        );
    }

    #[test]
    fn test_remove_punctuation_collapses_whitespace() {
        assert_eq!(remove_punctuation("  a -- b...c  "), "a b c");
        assert_eq!(remove_punctuation("!!!"), "");
    }
}
