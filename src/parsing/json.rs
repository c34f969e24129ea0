//! JSON and JSON Lines datasets.
//!
//! Each record is an object keyed by the configured column names. Prompt and
//! transcript values must be strings; `null` stands for a blank text. Durations
//! and human WCPM labels may be numbers or numeric strings.

use serde_json::{Map, Value};

use crate::config::ColumnConfig;
use crate::core::record::ReadingRecord;
use crate::parsing::dataset::ParseError;
use crate::utils::validation::{check_record_limit, parse_number};

/// Parse a JSON array of record objects. Record numbers in errors are 1-based
/// positions in the array.
///
/// # Errors
///
/// Returns `ParseError::Json` if the text is not JSON, `ParseError::InvalidFormat`
/// if it is not an array of objects, or any per-record error.
pub fn parse_json_array(text: &str, columns: &ColumnConfig) -> Result<Vec<ReadingRecord>, ParseError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(ParseError::InvalidFormat(
            "Expected a JSON array of records".to_string(),
        ));
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(items.len()));
        }
        records.push(record_from_value(item, columns, i + 1)?);
    }
    Ok(records)
}

/// Parse one JSON record object per line. Blank lines are skipped; record
/// numbers in errors are 1-based line numbers.
///
/// # Errors
///
/// Returns `ParseError::Json` for a line that is not JSON,
/// `ParseError::InvalidFormat` for a line that is not an object, or any
/// per-record error.
pub fn parse_json_lines(text: &str, columns: &ColumnConfig) -> Result<Vec<ReadingRecord>, ParseError> {
    let mut records = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        let value: Value = serde_json::from_str(line)?;
        records.push(record_from_value(&value, columns, i + 1)?);
    }

    Ok(records)
}

fn record_from_value(
    value: &Value,
    columns: &ColumnConfig,
    record: usize,
) -> Result<ReadingRecord, ParseError> {
    let Value::Object(object) = value else {
        return Err(ParseError::InvalidFormat(format!(
            "Record {record} is {}, expected an object",
            kind(value)
        )));
    };

    let prompt = required_text(object, &columns.prompt, record)?;
    let asr_transcript = required_text(object, &columns.asr_transcript, record)?;
    let human_transcript = optional_text(object, &columns.human_transcript, record)?;

    let duration_seconds = match object.get(&columns.duration) {
        None | Some(Value::Null) => {
            return Err(ParseError::MissingColumn {
                record,
                column: columns.duration.clone(),
            })
        }
        Some(value) => number(value).ok_or_else(|| {
            ParseError::InvalidFormat(format!(
                "Record {record}: invalid duration in column '{}': {value}",
                columns.duration
            ))
        })?,
    };

    let human_wcpm = match object.get(&columns.human_wcpm) {
        None | Some(Value::Null) => None,
        Some(value) => Some(number(value).ok_or_else(|| {
            ParseError::InvalidFormat(format!(
                "Record {record}: invalid WCPM in column '{}': {value}",
                columns.human_wcpm
            ))
        })?),
    };

    let id = match object.get(&columns.id) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };

    Ok(ReadingRecord {
        id,
        prompt,
        asr_transcript,
        human_transcript,
        duration_seconds,
        human_wcpm,
    })
}

fn required_text(
    object: &Map<String, Value>,
    column: &str,
    record: usize,
) -> Result<String, ParseError> {
    match object.get(column) {
        None => Err(ParseError::MissingColumn {
            record,
            column: column.to_string(),
        }),
        Some(value) => text(value, column, record).map(Option::unwrap_or_default),
    }
}

fn optional_text(
    object: &Map<String, Value>,
    column: &str,
    record: usize,
) -> Result<Option<String>, ParseError> {
    match object.get(column) {
        None => Ok(None),
        Some(value) => text(value, column, record),
    }
}

/// A string value, None for null, or a type-mismatch error
fn text(value: &Value, column: &str, record: usize) -> Result<Option<String>, ParseError> {
    match value {
        Value::String(s) => Ok(Some(s.clone())),
        Value::Null => Ok(None),
        other => Err(ParseError::NonTextual {
            record,
            column: column.to_string(),
            found: kind(other),
        }),
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
