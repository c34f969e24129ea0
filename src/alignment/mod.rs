//! Word-level alignment of a prompt against a reading transcript.
//!
//! - [`aligner`]: longest-common-subsequence edit script plus the tail trim
//! - [`classifier`]: correct/added/removed/replaced counts from an edit script
//!
//! ## Example
//!
//! ```rust
//! use litreading::alignment::{align, classify};
//!
//! let prompt: Vec<&str> = "a b c d e f g h".split_whitespace().collect();
//! let transcript: Vec<&str> = "a b x d e f g h".split_whitespace().collect();
//!
//! let ops = align(&prompt, &transcript).unwrap();
//! let result = classify(&ops);
//!
//! assert_eq!(result.correct, 7);
//! assert_eq!(result.replaced(), 1);
//! assert_eq!(result.error_pairs[0].reference, "c");
//! assert_eq!(result.error_pairs[0].hypothesis, "x");
//! ```

pub mod aligner;
pub mod classifier;

pub use aligner::{align, edit_script, tail_trim, AlignError};
pub use classifier::classify;
