//! Header-plus-data parsing of a whole import payload.

use tracing::debug;

use stocklot_model::{IngestError, RawRow, Result};

use crate::line::{TAB, parse_delimited_line};

/// Parses a complete tab-delimited import payload into raw rows.
///
/// The first non-blank line is the header row; every later non-blank line
/// is zipped against it positionally. Data lines with one or fewer fields,
/// or an empty first field, are dropped without surfacing an error; the
/// drop count is only visible at debug level.
///
/// # Errors
///
/// Returns [`IngestError::Format`] when fewer than two non-blank lines are
/// present (no header, or no data rows).
pub fn parse_document(text: &str) -> Result<Vec<RawRow>> {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(IngestError::Format);
    }
    let headers = parse_delimited_line(lines[0], TAB);
    let mut rows = Vec::with_capacity(lines.len() - 1);
    let mut dropped = 0usize;
    for line in &lines[1..] {
        let values = parse_delimited_line(line, TAB);
        if values.len() > 1 && !values[0].is_empty() {
            rows.push(RawRow::from_header_values(&headers, &values));
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        debug!(dropped, kept = rows.len(), "dropped malformed import rows");
    }
    Ok(rows)
}
