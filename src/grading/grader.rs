use serde::Serialize;
use thiserror::Error;

use crate::core::features::FeatureVector;
use crate::features::FeatureTable;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("Row {row} has non-finite features (zero or negative duration?)")]
    NonFiniteFeatures { row: usize },
}

/// Predicts words correct per minute from a record's features
pub trait Grader: Send + Sync {
    fn name(&self) -> &'static str;

    fn predict(&self, features: &FeatureVector) -> f64;
}

/// Takes the aligned correct-word rate as the WCPM estimate, with no model
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineGrader;

impl Grader for BaselineGrader {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn predict(&self, features: &FeatureVector) -> f64 {
        features.correct_words_pm
    }
}

/// A WCPM estimate for one row, next to the human label when there is one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub wcpm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_wcpm: Option<f64>,
}

/// Grade every row of a feature table.
///
/// Rows must be finite; filter them first with
/// [`FeatureTable::drop_non_finite`].
///
/// # Errors
///
/// Returns `GradeError::NonFiniteFeatures` naming the first (1-based) row with a
/// non-finite feature.
pub fn grade_table(grader: &dyn Grader, table: &FeatureTable) -> Result<Vec<Prediction>, GradeError> {
    table
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if !row.is_finite() {
                return Err(GradeError::NonFiniteFeatures { row: i + 1 });
            }
            Ok(Prediction {
                id: row.id.clone(),
                wcpm: grader.predict(&row.features),
                human_wcpm: row.human_wcpm,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::ReadingRecord;

    #[test]
    fn test_baseline_predicts_correct_rate() {
        let features = FeatureVector {
            correct_words_pm: 87.5,
            added_words_pm: 3.0,
            ..Default::default()
        };
        assert!((BaselineGrader.predict(&features) - 87.5).abs() < 1e-12);
    }

    #[test]
    fn test_grade_table() {
        let records = vec![
            ReadingRecord::new("a b c d e", "a b c d e", 30.0)
                .with_id("r1")
                .with_human_wcpm(9.0),
            ReadingRecord::new("a b c d e", "a b x d e", 60.0).with_id("r2"),
        ];
        let table = FeatureTable::build(&records).unwrap();
        let predictions = grade_table(&BaselineGrader, &table).unwrap();
        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].id.as_deref(), Some("r1"));
        assert!((predictions[0].wcpm - 10.0).abs() < 1e-12);
        assert_eq!(predictions[0].human_wcpm, Some(9.0));
        assert!((predictions[1].wcpm - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_grade_rejects_non_finite_rows() {
        let records = vec![
            ReadingRecord::new("a b c", "a b c", 60.0),
            ReadingRecord::new("a b c", "a b c", 0.0),
        ];
        let table = FeatureTable::build(&records).unwrap();
        assert!(matches!(
            grade_table(&BaselineGrader, &table),
            Err(GradeError::NonFiniteFeatures { row: 2 })
        ));
    }
}
