//! Core value types for fluency scoring.
//!
//! - [`EditTag`], [`EditOp`]: entries of an edit script aligning a prompt with a transcript
//! - [`ErrorPair`]: a prompt word read as a different word
//! - [`ClassificationResult`]: correct/added/removed/replaced word counts
//! - [`FeatureVector`]: per-minute rates and word-length statistics for one reading
//! - [`ReadingRecord`]: one reading to score
//!
//! All of these are plain values computed per record. Nothing here is shared
//! between records.
//!
//! [`EditTag`]: types::EditTag
//! [`EditOp`]: types::EditOp
//! [`ErrorPair`]: types::ErrorPair
//! [`ClassificationResult`]: types::ClassificationResult
//! [`FeatureVector`]: features::FeatureVector
//! [`ReadingRecord`]: record::ReadingRecord

pub mod features;
pub mod record;
pub mod types;
