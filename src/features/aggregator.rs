use crate::core::features::FeatureVector;
use crate::core::types::ClassificationResult;
use crate::utils::validation::count_to_f64;

/// Mean and population standard deviation of token lengths, in characters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WordLengthStats {
    pub mean: f64,
    pub std: f64,
}

/// Token length statistics for a sequence.
///
/// Lengths count Unicode scalar values, not bytes. An empty sequence has a mean
/// and standard deviation of 0.
#[must_use]
pub fn word_length_stats<S: AsRef<str>>(tokens: &[S]) -> WordLengthStats {
    if tokens.is_empty() {
        return WordLengthStats::default();
    }

    let lengths: Vec<f64> = tokens
        .iter()
        .map(|t| count_to_f64(t.as_ref().chars().count()))
        .collect();
    let n = count_to_f64(lengths.len());
    let mean = lengths.iter().sum::<f64>() / n;
    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;

    WordLengthStats {
        mean,
        std: variance.sqrt(),
    }
}

/// Turn classification counts into per-minute rates and add word-length statistics.
///
/// A zero or negative duration is not rejected: the rates come out infinite or
/// NaN and the caller decides what to do with the record.
#[must_use]
pub fn aggregate<R, H>(
    classification: &ClassificationResult,
    hypothesis_word_count: usize,
    duration_seconds: f64,
    reference: &[R],
    hypothesis: &[H],
) -> FeatureVector
where
    R: AsRef<str>,
    H: AsRef<str>,
{
    let duration_minutes = duration_seconds / 60.0;
    let per_minute = |count: usize| count_to_f64(count) / duration_minutes;

    let prompt_stats = word_length_stats(reference);
    let asr_stats = word_length_stats(hypothesis);

    FeatureVector {
        correct_words_pm: per_minute(classification.correct),
        added_words_pm: per_minute(classification.added),
        removed_words_pm: per_minute(classification.removed),
        replaced_words_pm: per_minute(classification.replaced()),
        asr_word_count_pm: per_minute(hypothesis_word_count),
        prompt_word_length_avg: prompt_stats.mean,
        prompt_word_length_std: prompt_stats.std,
        asr_word_length_avg: asr_stats.mean,
        asr_word_length_std: asr_stats.std,
    }
}
