use serde::Serialize;

/// Numeric features describing one reading.
///
/// Rate features (`*_pm`) are per minute of reading time. They are not
/// finite when the duration is zero or negative; callers filter such
/// records with [`FeatureVector::is_finite`] before modeling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FeatureVector {
    pub correct_words_pm: f64,
    pub added_words_pm: f64,
    pub removed_words_pm: f64,
    pub replaced_words_pm: f64,
    pub asr_word_count_pm: f64,
    pub prompt_word_length_avg: f64,
    pub prompt_word_length_std: f64,
    pub asr_word_length_avg: f64,
    pub asr_word_length_std: f64,
}

impl FeatureVector {
    /// Feature names in tabular column order
    pub const NAMES: [&'static str; 9] = [
        "correct_words_pm",
        "added_words_pm",
        "removed_words_pm",
        "replaced_words_pm",
        "asr_word_count_pm",
        "prompt_word_length_avg",
        "prompt_word_length_std",
        "asr_word_length_avg",
        "asr_word_length_std",
    ];

    /// Values in the same order as [`FeatureVector::NAMES`]
    #[must_use]
    pub fn values(&self) -> [f64; 9] {
        [
            self.correct_words_pm,
            self.added_words_pm,
            self.removed_words_pm,
            self.replaced_words_pm,
            self.asr_word_count_pm,
            self.prompt_word_length_avg,
            self.prompt_word_length_std,
            self.asr_word_length_avg,
            self.asr_word_length_std,
        ]
    }

    /// Iterate over `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::NAMES.into_iter().zip(self.values())
    }

    /// Look up a feature by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// True if every feature is a finite number
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.values().iter().all(|v| v.is_finite())
    }
}
