//! Text cleanup ahead of scoring.
//!
//! Prompts and transcripts arrive as raw text. Before alignment they are cleaned
//! by these steps, each of which can be switched off in [`NormalizerConfig`]:
//!
//! 1. **ASR string recomposition**: the transcript is a JSON list of
//!    `{"text": ...}` recognizer segments, joined with spaces (off by default)
//! 2. **Lowercase**
//! 3. **Numerals to words**: "12" becomes "twelve"
//! 4. **Punctuation removal**: ASCII punctuation becomes whitespace
//!
//! [`Preprocessor`] runs the enabled steps over a set of records and then builds
//! the feature table, reporting each stage to a [`StageObserver`].
//!
//! [`NormalizerConfig`]: crate::config::NormalizerConfig
//! [`Preprocessor`]: pipeline::Preprocessor
//! [`StageObserver`]: observer::StageObserver

pub mod normalizer;
pub mod numbers;
pub mod observer;
pub mod pipeline;

pub use normalizer::{NormalizeError, NormalizeStep, TextNormalizer};
pub use observer::{LoggingObserver, SilentObserver, StageObserver};
pub use pipeline::{PreprocessError, Preprocessor};
