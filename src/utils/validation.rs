//! Centralized validation and helper functions.

/// Maximum number of tokens in one aligned sequence.
///
/// Alignment keeps a full `(n + 1) * (m + 1)` table of `u32` cells, so one
/// record at this limit needs about 100 MB. Records are scored in parallel,
/// which multiplies the peak by the number of rayon worker threads; lower
/// `RAYON_NUM_THREADS` when scoring long passages on a small machine.
pub const MAX_SEQUENCE_TOKENS: usize = 5_000;

/// Maximum number of records loaded from a single dataset
pub const MAX_RECORDS: usize = 1_000_000;

/// Check that a token sequence is small enough to align.
///
/// Returns an error message if the sequence is too long, None if safe.
#[must_use]
pub fn check_token_limit(count: usize) -> Option<String> {
    if count > MAX_SEQUENCE_TOKENS {
        Some(format!(
            "Sequence has {count} tokens, exceeding maximum of {MAX_SEQUENCE_TOKENS}"
        ))
    } else {
        None
    }
}

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_record_limit(records.len()).is_some() {
///     return Err(...);
/// }
/// records.push(record); // Safe to add
/// ```
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Safely convert usize to f64 for rate and statistics calculations
///
/// Word counts are far below the 2^53 limit of exact f64 integers.
#[inline]
#[must_use]
pub fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Parse a numeric cell (duration or WCPM), accepting surrounding whitespace.
///
/// Returns None for empty or non-numeric text.
#[must_use]
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
