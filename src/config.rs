//! Settings for text normalization and dataset columns.
//!
//! Settings can be loaded from a JSON file; every field is optional and falls
//! back to its default:
//!
//! ```json
//! {
//!   "normalizer": { "asr_string_recomposition": true, "convert_num2words": false },
//!   "columns": { "duration": "reading_seconds" },
//!   "hypothesis": "human"
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Which text cleanup steps run before scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Transcript is a JSON list of `{"text": ...}` recognizer segments
    pub asr_string_recomposition: bool,
    pub to_lowercase: bool,
    pub remove_punctuation: bool,
    /// Rewrite numerals as English words ("42" -> "forty two")
    pub convert_num2words: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            asr_string_recomposition: false,
            to_lowercase: true,
            remove_punctuation: true,
            convert_num2words: true,
        }
    }
}

/// Dataset column names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub id: String,
    pub prompt: String,
    pub asr_transcript: String,
    pub human_transcript: String,
    pub duration: String,
    pub human_wcpm: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            prompt: "prompt".to_string(),
            asr_transcript: "asr_transcript".to_string(),
            human_transcript: "human_transcript".to_string(),
            duration: "scored_duration".to_string(),
            human_wcpm: "human_wcpm".to_string(),
        }
    }
}

/// Which transcript is aligned against the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisSource {
    /// Speech-recognition transcript
    #[default]
    Asr,
    /// Human transcript, for grading against hand-transcribed readings
    Human,
}

impl std::fmt::Display for HypothesisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asr => write!(f, "asr"),
            Self::Human => write!(f, "human"),
        }
    }
}

/// All user-facing settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub normalizer: NormalizerConfig,
    pub columns: ColumnConfig,
    pub hypothesis: HypothesisSource,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read or
    /// `ConfigError::ParseError` if it is not valid settings JSON.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse settings from JSON text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the text is not valid settings JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.normalizer.to_lowercase);
        assert!(settings.normalizer.remove_punctuation);
        assert!(settings.normalizer.convert_num2words);
        assert!(!settings.normalizer.asr_string_recomposition);
        assert_eq!(settings.columns.prompt, "prompt");
        assert_eq!(settings.columns.duration, "scored_duration");
        assert_eq!(settings.hypothesis, HypothesisSource::Asr);
    }

    #[test]
    fn test_hypothesis_source_from_json() {
        let settings = Settings::from_json(r#"{"hypothesis": "human"}"#).unwrap();
        assert_eq!(settings.hypothesis, HypothesisSource::Human);
        assert!(Settings::from_json(r#"{"hypothesis": "typed"}"#).is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(
            r#"{"normalizer": {"convert_num2words": false}, "columns": {"duration": "secs"}}"#,
        )
        .unwrap();
        assert!(!settings.normalizer.convert_num2words);
        assert!(settings.normalizer.to_lowercase);
        assert_eq!(settings.columns.duration, "secs");
        assert_eq!(settings.columns.asr_transcript, "asr_transcript");
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
