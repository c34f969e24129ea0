//! Command-line interface for litreading.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **features**: Compute the feature table for a dataset of readings
//! - **compare**: Align one prompt against one transcript and show the details
//! - **grade**: Estimate words correct per minute for a dataset of readings
//!
//! ## Usage
//!
//! ```text
//! # Feature table for a dataset
//! litreading features readings.jsonl
//!
//! # TSV output, without records that have a zero duration
//! litreading features readings.tsv --format tsv --drop-non-finite
//!
//! # Compare a prompt with what was read
//! litreading compare "The cat sat on the mat." "the cat sat on a mat" --duration 4.5
//!
//! # Baseline WCPM, compared with human labels when the dataset has them
//! litreading grade readings.json --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod compare;
pub mod features;
pub mod grade;

#[derive(Parser)]
#[command(name = "litreading")]
#[command(author = "Literacy Reading Team")]
#[command(version)]
#[command(about = "Score oral-reading fluency from a prompt and a reading transcript")]
#[command(
    long_about = "litreading aligns the text a reader was asked to read with a transcript of what they read.\n\nFrom the alignment it counts correct, added, removed and replaced words and derives:\n- Per-minute rates of each kind of word\n- Word-length statistics of the prompt and the transcript\n- A baseline words-correct-per-minute estimate"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute fluency features for every reading in a dataset
    Features(features::FeaturesArgs),

    /// Align a prompt with a transcript
    Compare(compare::CompareArgs),

    /// Estimate words correct per minute for every reading in a dataset
    Grade(grade::GradeArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Text cleanup options shared by all commands
#[derive(clap::Args, Debug, Default)]
pub struct NormalizerArgs {
    /// Settings file (JSON) with normalizer steps and column names
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Transcripts are JSON lists of {"text": ...} recognizer segments
    #[arg(long)]
    pub asr_segments: bool,

    /// Keep the original letter case
    #[arg(long)]
    pub no_lowercase: bool,

    /// Keep punctuation
    #[arg(long)]
    pub keep_punctuation: bool,

    /// Leave numerals as digits
    #[arg(long)]
    pub no_num2words: bool,
}

impl NormalizerArgs {
    /// Settings from the config file (or defaults), with flags applied on top
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from_file(path)?,
            None => Settings::default(),
        };

        let normalizer = &mut settings.normalizer;
        if self.asr_segments {
            normalizer.asr_string_recomposition = true;
        }
        if self.no_lowercase {
            normalizer.to_lowercase = false;
        }
        if self.keep_punctuation {
            normalizer.remove_punctuation = false;
        }
        if self.no_num2words {
            normalizer.convert_num2words = false;
        }

        Ok(settings)
    }
}

/// Format a feature value for text and TSV output
pub(crate) fn format_value(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        value.to_string()
    }
}
