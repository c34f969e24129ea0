use std::collections::HashMap;

use crate::config::ColumnConfig;
use crate::core::record::ReadingRecord;
use crate::parsing::dataset::ParseError;
use crate::utils::validation::{check_record_limit, parse_number};

/// Parse delimited text (TSV or CSV) with a header row naming the columns.
///
/// Columns are looked up by the names in `columns`; extra columns are ignored.
/// Lines starting with `#` and blank lines are skipped. Fields are trimmed, and
/// empty optional cells (id, human transcript, human WCPM) are treated as
/// absent. Double-quoted fields are recognized for every delimiter except tab,
/// so CSV prompts may contain commas.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if there is no header, the delimiter is
/// not ASCII, or a row has an invalid duration or WCPM,
/// `ParseError::MissingColumn` if the header lacks a required column,
/// `ParseError::Csv` for malformed quoting, or `ParseError::TooManyRecords` if
/// the limit is exceeded.
pub fn parse_tsv_text(
    text: &str,
    delimiter: char,
    columns: &ColumnConfig,
) -> Result<Vec<ReadingRecord>, ParseError> {
    let delimiter = u8::try_from(delimiter).map_err(|_| {
        ParseError::InvalidFormat(format!("Delimiter must be ASCII, got {delimiter:?}"))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .quoting(delimiter != b'\t')
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let header = reader.headers()?.clone();
    if header.iter().all(str::is_empty) {
        return Err(ParseError::InvalidFormat(
            "No header row found in file".to_string(),
        ));
    }
    let header_line = header.position().map_or(1, csv::Position::line);

    let positions: HashMap<&str, usize> = header
        .iter()
        .enumerate()
        .map(|(i, name)| (name, i))
        .collect();

    let required = |column: &str| {
        positions
            .get(column)
            .copied()
            .ok_or_else(|| ParseError::MissingColumn {
                record: usize::try_from(header_line).unwrap_or(usize::MAX),
                column: column.to_string(),
            })
    };
    let prompt_col = required(columns.prompt.as_str())?;
    let asr_col = required(columns.asr_transcript.as_str())?;
    let duration_col = required(columns.duration.as_str())?;
    let id_col = positions.get(columns.id.as_str()).copied();
    let human_col = positions.get(columns.human_transcript.as_str()).copied();
    let wcpm_col = positions.get(columns.human_wcpm.as_str()).copied();

    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        if row.iter().all(str::is_empty) {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = row.position().map_or(0, csv::Position::line);
        let cell = |col: usize| row.get(col).unwrap_or("");
        let optional = |col: Option<usize>| col.map(cell).filter(|s| !s.is_empty());

        let duration_seconds = parse_number(cell(duration_col)).ok_or_else(|| {
            ParseError::InvalidFormat(format!(
                "Invalid duration on line {}: '{}'",
                line_num,
                cell(duration_col)
            ))
        })?;

        let human_wcpm = match optional(wcpm_col) {
            Some(raw) => Some(parse_number(raw).ok_or_else(|| {
                ParseError::InvalidFormat(format!("Invalid WCPM on line {line_num}: '{raw}'"))
            })?),
            None => None,
        };

        // Check record limit for DOS protection
        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        records.push(ReadingRecord {
            id: optional(id_col).map(str::to_string),
            prompt: cell(prompt_col).to_string(),
            asr_transcript: cell(asr_col).to_string(),
            human_transcript: optional(human_col).map(str::to_string),
            duration_seconds,
            human_wcpm,
        });
    }

    Ok(records)
}
