use std::ffi::OsStr;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::config::ColumnConfig;
use crate::core::record::ReadingRecord;
use crate::parsing::{json, tsv};
use crate::utils::validation::MAX_RECORDS;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid delimited text: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid dataset format: {0}")]
    InvalidFormat(String),

    #[error("Record {record}: missing column '{column}'")]
    MissingColumn { record: usize, column: String },

    #[error("Record {record}: column '{column}' must be text, found {found}")]
    NonTextual {
        record: usize,
        column: String,
        found: &'static str,
    },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Too many records: {0} exceeds maximum allowed ({max})", max = MAX_RECORDS)]
    TooManyRecords(usize),
}

/// Layout of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DatasetFormat {
    /// A JSON array of record objects
    Json,
    /// One JSON record object per line
    Jsonl,
    /// Comma-separated values with a header row; fields may be double-quoted
    Csv,
    /// Tab-separated values with a header row
    Tsv,
}

impl DatasetFormat {
    /// Detect the format from a file name, looking through a `.gz` suffix
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnsupportedFormat` for unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let inner = if is_gzipped(path) {
            path.file_stem().map(Path::new).unwrap_or(path)
        } else {
            path
        };

        match inner
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("jsonl" | "ndjson") => Ok(Self::Jsonl),
            Some("csv") => Ok(Self::Csv),
            Some("tsv") => Ok(Self::Tsv),
            Some(ext) => Err(ParseError::UnsupportedFormat(ext.to_string())),
            None => Err(ParseError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".gz")
}

/// Load reading records from a dataset file.
///
/// The format comes from `format` if given, otherwise from the file extension.
/// Gzip-compressed files (`.gz`) are decompressed transparently. A path of `-`
/// reads standard input (JSON Lines unless `format` says otherwise).
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read,
/// `ParseError::UnsupportedFormat` for unknown extensions, or any error from
/// [`parse_dataset_text`].
pub fn parse_dataset_file(
    path: &Path,
    format: Option<DatasetFormat>,
    columns: &ColumnConfig,
) -> Result<Vec<ReadingRecord>, ParseError> {
    let mut content = String::new();

    let format = if path.as_os_str() == "-" {
        std::io::stdin().read_to_string(&mut content)?;
        format.unwrap_or(DatasetFormat::Jsonl)
    } else {
        let format = match format {
            Some(format) => format,
            None => DatasetFormat::from_path(path)?,
        };
        let file = std::fs::File::open(path)?;
        if is_gzipped(path) {
            GzDecoder::new(file).read_to_string(&mut content)?;
        } else {
            std::io::BufReader::new(file).read_to_string(&mut content)?;
        }
        format
    };

    let records = parse_dataset_text(&content, format, columns)?;
    debug!(path = %path.display(), records = records.len(), "Loaded dataset");
    Ok(records)
}

/// Parse reading records from dataset text
///
/// # Errors
///
/// Returns `ParseError::Json` or `ParseError::InvalidFormat` for malformed input,
/// `ParseError::MissingColumn` if a required column is absent,
/// `ParseError::NonTextual` if a text column holds a non-text value, or
/// `ParseError::TooManyRecords` if the record limit is exceeded.
pub fn parse_dataset_text(
    text: &str,
    format: DatasetFormat,
    columns: &ColumnConfig,
) -> Result<Vec<ReadingRecord>, ParseError> {
    match format {
        DatasetFormat::Json => json::parse_json_array(text, columns),
        DatasetFormat::Jsonl => json::parse_json_lines(text, columns),
        DatasetFormat::Csv => tsv::parse_tsv_text(text, ',', columns),
        DatasetFormat::Tsv => tsv::parse_tsv_text(text, '\t', columns),
    }
}
