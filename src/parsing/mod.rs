//! Loaders for reading datasets.
//!
//! A dataset is a list of records, each with a prompt, a speech-recognition
//! transcript and a reading duration, plus optional id, human transcript and
//! human WCPM label. Supported layouts:
//!
//! - **JSON** (`.json`): an array of record objects
//! - **JSON Lines** (`.jsonl`, `.ndjson`): one record object per line
//! - **CSV** (`.csv`): a header row naming the columns, then one record per line;
//!   fields containing commas are double-quoted
//! - **TSV** (`.tsv`): like CSV, tab-separated and without quoting
//!
//! Any of these may be gzip compressed (`.gz`). Column names come from
//! [`ColumnConfig`](crate::config::ColumnConfig).
//!
//! ## Example
//!
//! ```rust
//! use litreading::config::ColumnConfig;
//! use litreading::parsing::{parse_dataset_text, DatasetFormat};
//!
//! let text = r#"{"prompt": "The cat sat.", "asr_transcript": "the cat sat", "scored_duration": 4.2}"#;
//! let records = parse_dataset_text(text, DatasetFormat::Jsonl, &ColumnConfig::default()).unwrap();
//! assert_eq!(records[0].asr_transcript, "the cat sat");
//! ```

pub mod dataset;
pub mod json;
pub mod tsv;

pub use dataset::{parse_dataset_file, parse_dataset_text, DatasetFormat, ParseError};
