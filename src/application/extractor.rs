//! Phone-number extraction service.
//!
//! Turns raw uploaded table bytes into a [`CleanedSequence`]: decode as
//! UTF-8, parse as a headered CSV table, take the first column, strip
//! every non-digit character, and keep only runs of more than
//! [`MIN_DIGITS`] digits.

use csv::ReaderBuilder;

use crate::domain::{AppError, CleanedSequence, ExtractionStats, Result};

/// A cell survives only if it yields strictly more than this many digits.
pub const MIN_DIGITS: usize = 8;

/// Extracts cleaned phone numbers from raw table bytes.
///
/// Pure function of its input: identical bytes always produce an
/// element-wise identical sequence, so callers may memoize the result
/// (see [`super::cache::ExtractCache`]).
///
/// # Errors
/// Returns [`AppError::Encoding`] for non-UTF-8 input,
/// [`AppError::MalformedInput`] for structurally invalid rows, and
/// [`AppError::MissingColumn`] for a table with zero columns.
pub fn extract(raw: &[u8]) -> Result<CleanedSequence> {
    extract_with_stats(raw).map(|(seq, _)| seq)
}

/// Like [`extract`], but also reports per-run statistics.
///
/// # Errors
/// Same conditions as [`extract`].
pub fn extract_with_stats(raw: &[u8]) -> Result<(CleanedSequence, ExtractionStats)> {
    // Validate encoding up front so a bad upload fails before any row
    // is consumed.
    let text = std::str::from_utf8(raw).map_err(AppError::encoding)?;

    // has_headers(true) skips the header row; every field is read as a
    // plain string, so leading zeros and symbols survive until the
    // digit-stripping step.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(AppError::malformed)?;
    if headers.is_empty() {
        return Err(AppError::MissingColumn);
    }

    let mut stats = ExtractionStats::default();
    let mut numbers = Vec::new();

    for record in reader.records() {
        let record = record.map_err(AppError::malformed)?;
        stats.rows_scanned += 1;

        let Some(cell) = record.get(0) else {
            continue;
        };

        match clean_cell(cell) {
            Some(number) => {
                stats.numbers_kept += 1;
                numbers.push(number);
            }
            None => {
                stats.cells_discarded += 1;
            }
        }
    }

    tracing::info!(
        "Extracted {} cleaned numbers from {} rows ({} discarded)",
        stats.numbers_kept,
        stats.rows_scanned,
        stats.cells_discarded
    );

    Ok((CleanedSequence::from_cleaned(numbers), stats))
}

/// Strips every non-digit character from a cell and applies the length
/// filter. Returns `None` for cells that do not qualify.
fn clean_cell(cell: &str) -> Option<String> {
    let digits: String = cell.chars().filter(char::is_ascii_digit).collect();

    if digits.len() > MIN_DIGITS {
        Some(digits)
    } else {
        None
    }
}
