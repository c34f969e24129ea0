//! # litreading
//!
//! A library for scoring oral-reading fluency.
//!
//! A reader is given a prompt and reads it aloud; a speech recognizer (or a
//! human) produces a transcript of what was read. `litreading` aligns the two
//! word sequences and turns the alignment into numerical features that a
//! grading model can use to estimate words correct per minute (WCPM).
//!
//! ## Features
//!
//! - **Word alignment**: Longest-common-subsequence edit script between prompt and transcript
//! - **Tail trimming**: Unread prompt text at the end of a reading is not counted against the reader
//! - **Word classification**: Correct, added, removed and replaced words, with the replaced pairs
//! - **Per-minute rates**: Every count scaled by the reading duration
//! - **Text normalization**: Case folding, numerals to words, punctuation removal
//! - **Dataset loading**: JSON, JSON Lines and TSV datasets, optionally gzip-compressed
//!
//! ## Example
//!
//! ```rust
//! use litreading::features::score_texts;
//!
//! let score = score_texts("the cat sat on the mat", "the cat sat on a mat", 30.0).unwrap();
//!
//! assert_eq!(score.classification.correct, 5);
//! assert_eq!(score.classification.replaced(), 1);
//! assert_eq!(score.features.correct_words_pm, 10.0);
//! ```
//!
//! ## Modules
//!
//! - [`alignment`]: Edit script, tail trim and word classification
//! - [`features`]: Feature vectors and the per-dataset feature table
//! - [`preprocess`]: Text normalization and the staged preprocessing pipeline
//! - [`parsing`]: Dataset readers for JSON, JSON Lines and TSV
//! - [`grading`]: WCPM estimation from feature rows
//! - [`config`]: Normalizer and column-name settings
//! - [`core`]: Core data types shared by the other modules
//! - [`cli`]: Command-line interface implementation

pub mod alignment;
pub mod cli;
pub mod config;
pub mod core;
pub mod features;
pub mod grading;
pub mod parsing;
pub mod preprocess;
pub mod utils;

// Re-export commonly used types for convenience
pub use alignment::{align, classify, AlignError};
pub use config::{HypothesisSource, Settings};
pub use core::features::FeatureVector;
pub use core::record::ReadingRecord;
pub use core::types::*;
pub use features::{FeatureRow, FeatureTable};
pub use grading::{BaselineGrader, Grader};
pub use preprocess::{Preprocessor, TextNormalizer};
