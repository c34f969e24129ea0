use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::alignment::{align, classify, AlignError};
use crate::config::HypothesisSource;
use crate::core::features::FeatureVector;
use crate::core::record::ReadingRecord;
use crate::core::types::{ClassificationResult, ErrorPair};
use crate::features::aggregator::aggregate;

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Failed to score record {record}: {source}")]
    Alignment {
        record: String,
        #[source]
        source: AlignError,
    },

    #[error("Record {record} has no human transcript to score")]
    MissingHumanTranscript { record: String },
}

/// Classification and features for one prompt/transcript pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordScore {
    pub classification: ClassificationResult,
    pub features: FeatureVector,
}

/// Score one cleaned prompt against one cleaned transcript.
///
/// Both texts are split on whitespace into tokens.
///
/// # Errors
///
/// Returns `AlignError::SequenceTooLong` if either text has too many tokens.
pub fn score_texts(
    prompt: &str,
    transcript: &str,
    duration_seconds: f64,
) -> Result<RecordScore, AlignError> {
    let reference: Vec<&str> = prompt.split_whitespace().collect();
    let hypothesis: Vec<&str> = transcript.split_whitespace().collect();

    let ops = align(&reference, &hypothesis)?;
    let classification = classify(&ops);
    let features = aggregate(
        &classification,
        hypothesis.len(),
        duration_seconds,
        &reference,
        &hypothesis,
    );

    Ok(RecordScore {
        classification,
        features,
    })
}

/// One output row of the feature table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub features: FeatureVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_wcpm: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub error_pairs: Vec<ErrorPair>,
}

impl FeatureRow {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.features.is_finite()
    }
}

/// Feature rows for a set of records, in input order
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeatureTable {
    pub rows: Vec<FeatureRow>,
}

impl FeatureTable {
    /// Score every record against its ASR transcript.
    ///
    /// # Errors
    ///
    /// See [`FeatureTable::build_with`].
    pub fn build(records: &[ReadingRecord]) -> Result<Self, FeatureError> {
        Self::build_with(records, HypothesisSource::Asr)
    }

    /// Score every record against the transcript named by `source`. Records
    /// are independent and scored in parallel; row order matches record order.
    ///
    /// # Errors
    ///
    /// Returns the error of the lowest-indexed failing record:
    /// `FeatureError::Alignment` if it cannot be aligned, or
    /// `FeatureError::MissingHumanTranscript` if `source` is
    /// [`HypothesisSource::Human`] and it has no human transcript. No partial
    /// table is returned.
    pub fn build_with(
        records: &[ReadingRecord],
        source: HypothesisSource,
    ) -> Result<Self, FeatureError> {
        let scored: Vec<Result<FeatureRow, FeatureError>> = records
            .par_iter()
            .enumerate()
            .map(|(index, record)| build_row(index, record, source))
            .collect();
        let rows = scored.into_iter().collect::<Result<Vec<_>, _>>()?;

        debug!(rows = rows.len(), %source, "Built feature table");
        Ok(Self { rows })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureRow> {
        self.rows.iter()
    }

    /// Remove rows with any non-finite feature (zero or negative durations).
    ///
    /// Returns the number of rows removed.
    pub fn drop_non_finite(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(FeatureRow::is_finite);
        let dropped = before - self.rows.len();
        if dropped > 0 {
            warn!(dropped, "Dropped records with non-finite features");
        }
        dropped
    }
}

fn build_row(
    index: usize,
    record: &ReadingRecord,
    source: HypothesisSource,
) -> Result<FeatureRow, FeatureError> {
    let transcript = match source {
        HypothesisSource::Asr => record.asr_transcript.as_str(),
        HypothesisSource::Human => record.human_transcript.as_deref().ok_or_else(|| {
            FeatureError::MissingHumanTranscript {
                record: record_label(index, record),
            }
        })?,
    };

    let score = score_texts(&record.prompt, transcript, record.duration_seconds)
    .map_err(|source| FeatureError::Alignment {
        record: record_label(index, record),
        source,
    })?;

    debug!(
        record = %record_label(index, record),
        correct = score.classification.correct,
        added = score.classification.added,
        removed = score.classification.removed,
        replaced = score.classification.replaced(),
        "Scored record"
    );

    Ok(FeatureRow {
        id: record.id.clone(),
        features: score.features,
        human_wcpm: record.human_wcpm,
        error_pairs: score.classification.error_pairs,
    })
}

/// Human-readable record label: its id, or its 1-based position
fn record_label(index: usize, record: &ReadingRecord) -> String {
    match &record.id {
        Some(id) => format!("'{id}'"),
        None => format!("#{}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_texts_identity() {
        let score = score_texts("the cat sat on the mat", "the cat sat on the mat", 60.0).unwrap();
        assert!((score.features.correct_words_pm - 6.0).abs() < 1e-12);
        assert!(score.features.added_words_pm.abs() < 1e-12);
        assert!(score.features.removed_words_pm.abs() < 1e-12);
        assert!(score.features.replaced_words_pm.abs() < 1e-12);
    }

    #[test]
    fn test_build_preserves_order_and_ids() {
        let records: Vec<ReadingRecord> = (0..50)
            .map(|i| {
                let prompt = "one two three four five six";
                let words = 1 + i % 6;
                let transcript = prompt
                    .split_whitespace()
                    .take(words)
                    .collect::<Vec<_>>()
                    .join(" ");
                ReadingRecord::new(prompt, transcript, 60.0).with_id(format!("r{i}"))
            })
            .collect();

        let table = FeatureTable::build(&records).unwrap();
        assert_eq!(table.len(), 50);
        for (i, row) in table.iter().enumerate() {
            assert_eq!(row.id.as_deref(), Some(format!("r{i}").as_str()));
            let expected = 1 + i % 6;
            assert!((row.features.asr_word_count_pm - expected as f64).abs() < 1e-12);
            // Missing words at the end are trimmed, so everything read is correct
            assert!((row.features.correct_words_pm - expected as f64).abs() < 1e-12);
            assert!(row.features.removed_words_pm.abs() < 1e-12);
        }
    }

    #[test]
    fn test_drop_non_finite() {
        let records = vec![
            ReadingRecord::new("a b c", "a b c", 60.0),
            ReadingRecord::new("a b c", "a b c", 0.0),
            ReadingRecord::new("a b c", "a b c", 30.0),
        ];
        let mut table = FeatureTable::build(&records).unwrap();
        assert_eq!(table.drop_non_finite(), 1);
        assert_eq!(table.len(), 2);
        assert!(table.iter().all(FeatureRow::is_finite));
    }

    #[test]
    fn test_alignment_error_names_record() {
        let long_prompt = "w ".repeat(crate::utils::validation::MAX_SEQUENCE_TOKENS + 1);
        let records = vec![
            ReadingRecord::new("a b c", "a b c", 60.0),
            ReadingRecord::new(long_prompt, "w", 60.0),
        ];
        let err = FeatureTable::build(&records).unwrap_err();
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn test_human_source_scores_human_transcript() {
        let records = vec![ReadingRecord::new("a b c d e f", "a b c d e f", 60.0)
            .with_human_transcript("a b x d e f")];

        let asr = FeatureTable::build_with(&records, HypothesisSource::Asr).unwrap();
        let human = FeatureTable::build_with(&records, HypothesisSource::Human).unwrap();

        assert_ne!(asr.rows[0], human.rows[0]);
        assert!((asr.rows[0].features.correct_words_pm - 6.0).abs() < 1e-12);
        assert!((human.rows[0].features.correct_words_pm - 5.0).abs() < 1e-12);
        assert_eq!(human.rows[0].error_pairs, vec![ErrorPair::new("c", "x")]);
    }

    #[test]
    fn test_human_source_requires_human_transcript() {
        let records = vec![
            ReadingRecord::new("a b c", "a b c", 60.0).with_human_transcript("a b c"),
            ReadingRecord::new("a b c", "a b c", 60.0).with_id("no-human"),
        ];
        let err = FeatureTable::build_with(&records, HypothesisSource::Human).unwrap_err();
        assert!(matches!(err, FeatureError::MissingHumanTranscript { ref record } if record == "'no-human'"));
    }

    #[test]
    fn test_error_reports_lowest_failing_record() {
        let records: Vec<ReadingRecord> = (0..200)
            .map(|i| {
                let record = ReadingRecord::new("a b c", "a b c", 60.0);
                if i % 7 == 3 {
                    record
                } else {
                    record.with_human_transcript("a b c")
                }
            })
            .collect();

        for _ in 0..10 {
            let err = FeatureTable::build_with(&records, HypothesisSource::Human).unwrap_err();
            assert_eq!(err.to_string(), "Record #4 has no human transcript to score");
        }
    }

    #[test]
    fn test_row_serializes_flat() {
        let records = vec![ReadingRecord::new("a b c d e", "a b x d e", 60.0)
            .with_id("r1")
            .with_human_wcpm(4.0)];
        let table = FeatureTable::build(&records).unwrap();
        let json = serde_json::to_value(&table.rows[0]).unwrap();
        assert_eq!(json["id"], "r1");
        assert_eq!(json["replaced_words_pm"], 1.0);
        assert_eq!(json["human_wcpm"], 4.0);
        assert_eq!(json["error_pairs"][0]["reference"], "c");
    }
}
