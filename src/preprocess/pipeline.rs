use rayon::prelude::*;
use thiserror::Error;

use crate::config::{HypothesisSource, NormalizerConfig};
use crate::core::record::ReadingRecord;
use crate::features::{FeatureError, FeatureTable};
use crate::preprocess::normalizer::{apply_step, NormalizeError, NormalizeStep};
use crate::preprocess::observer::StageObserver;

/// Name of the final stage, after all text steps
pub const FEATURE_STAGE: &str = "compute_numerical_features";

#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("Failed to normalize record #{record} at step {step}: {source}")]
    Normalize {
        record: usize,
        step: NormalizeStep,
        #[source]
        source: NormalizeError,
    },

    #[error(transparent)]
    Features(#[from] FeatureError),
}

/// Cleans raw records and computes their feature table
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    steps: Vec<NormalizeStep>,
    hypothesis: HypothesisSource,
}

impl Preprocessor {
    #[must_use]
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            steps: config.enabled_steps(),
            hypothesis: HypothesisSource::Asr,
        }
    }

    /// Score the prompt against the transcript named by `source`
    #[must_use]
    pub fn with_hypothesis(mut self, source: HypothesisSource) -> Self {
        self.hypothesis = source;
        self
    }

    /// Stage names of a run, in order
    #[must_use]
    pub fn stages(&self) -> Vec<&'static str> {
        self.steps
            .iter()
            .map(|step| step.name())
            .chain(std::iter::once(FEATURE_STAGE))
            .collect()
    }

    /// Normalize every record, one step at a time across all records, then
    /// build the feature table. The observer hears about each stage as it starts.
    ///
    /// # Errors
    ///
    /// Returns `PreprocessError::Normalize` for the lowest-indexed record whose
    /// transcript cannot be recomposed, or `PreprocessError::Features` if a
    /// record cannot be scored.
    pub fn run(
        &self,
        records: &[ReadingRecord],
        observer: &dyn StageObserver,
    ) -> Result<FeatureTable, PreprocessError> {
        let total = self.steps.len() + 1;
        let mut cleaned = records.to_vec();

        for (i, step) in self.steps.iter().copied().enumerate() {
            observer.on_stage(i + 1, total, step.name());
            let failed = cleaned
                .par_iter_mut()
                .enumerate()
                .filter_map(|(index, record)| {
                    normalize_record(step, record)
                        .err()
                        .map(|source| (index, source))
                })
                .min_by_key(|(index, _)| *index);

            if let Some((index, source)) = failed {
                return Err(PreprocessError::Normalize {
                    record: index + 1,
                    step,
                    source,
                });
            }
        }

        observer.on_stage(total, total, FEATURE_STAGE);
        Ok(FeatureTable::build_with(&cleaned, self.hypothesis)?)
    }
}

fn normalize_record(
    step: NormalizeStep,
    record: &mut ReadingRecord,
) -> Result<(), NormalizeError> {
    record.asr_transcript = apply_step(step, &record.asr_transcript)?;
    if step.applies_to_all_texts() {
        record.prompt = apply_step(step, &record.prompt)?;
        if let Some(human) = &record.human_transcript {
            record.human_transcript = Some(apply_step(step, human)?);
        }
    }
    Ok(())
}
