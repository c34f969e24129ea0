//! Turning feature rows into words-correct-per-minute estimates.
//!
//! [`Grader`] is the seam for a predictive model. The crate ships only
//! [`BaselineGrader`], which reads WCPM straight off the aligned correct-word
//! rate; trained models live outside this crate and plug in by implementing
//! [`Grader`].
//!
//! [`Grader`]: grader::Grader
//! [`BaselineGrader`]: grader::BaselineGrader

pub mod evaluation;
pub mod grader;

pub use evaluation::GradeSummary;
pub use grader::{grade_table, BaselineGrader, GradeError, Grader, Prediction};
