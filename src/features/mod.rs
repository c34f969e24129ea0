//! Numeric features derived from an aligned reading.
//!
//! - [`aggregator`]: per-minute rates and word-length statistics for one record
//! - [`table`]: one feature row per record, computed in parallel
//!
//! ## Features
//!
//! | Name | Meaning |
//! |------|---------|
//! | `correct_words_pm` | prompt words read correctly, per minute |
//! | `added_words_pm` | words read that are not in the prompt, per minute |
//! | `removed_words_pm` | prompt words skipped, per minute |
//! | `replaced_words_pm` | prompt words read as a different word, per minute |
//! | `asr_word_count_pm` | transcript words, per minute |
//! | `prompt_word_length_avg`, `prompt_word_length_std` | prompt word lengths |
//! | `asr_word_length_avg`, `asr_word_length_std` | transcript word lengths |

pub mod aggregator;
pub mod table;

pub use aggregator::{aggregate, word_length_stats, WordLengthStats};
pub use table::{score_texts, FeatureError, FeatureRow, FeatureTable, RecordScore};
