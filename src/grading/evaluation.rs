use serde::Serialize;

use crate::grading::grader::Prediction;
use crate::utils::validation::count_to_f64;

/// Agreement between predictions and human WCPM labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeSummary {
    /// Number of predictions that had a human label
    pub labeled: usize,
    pub mean_absolute_error: f64,
    pub root_mean_squared_error: f64,
}

impl GradeSummary {
    /// Compare predictions with their labels. Unlabeled predictions are
    /// skipped; returns None if no prediction is labeled.
    #[must_use]
    pub fn evaluate(predictions: &[Prediction]) -> Option<Self> {
        let errors: Vec<f64> = predictions
            .iter()
            .filter_map(|p| p.human_wcpm.map(|label| p.wcpm - label))
            .collect();
        if errors.is_empty() {
            return None;
        }

        let n = count_to_f64(errors.len());
        let mean_absolute_error = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
        let mean_squared_error = errors.iter().map(|e| e * e).sum::<f64>() / n;

        Some(Self {
            labeled: errors.len(),
            mean_absolute_error,
            root_mean_squared_error: mean_squared_error.sqrt(),
        })
    }
}
