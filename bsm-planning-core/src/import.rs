//! CSV boundary: spreadsheet export → typed match records.

use std::path::Path;

use crate::error::ImportError;
use crate::layout::RowLayout;
use crate::row::{build_match, is_schedule_row};
use crate::types::Match;

/// Parse CSV content into match records under the given layout.
///
/// The reader is headerless and flexible: exports mix header rows, blank
/// rows, and decorative rows with the real data, and trailing columns are
/// ragged. Non-schedule rows are filtered by [`is_schedule_row`]; a record
/// the CSV reader itself cannot decode is warned about and skipped so one
/// bad row never blocks the batch.
pub fn parse_schedule_csv(content: &str, layout: &RowLayout, year: i32) -> Vec<Match> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut matches = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed CSV row: {e}");
                continue;
            }
        };

        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        if !is_schedule_row(&cells) {
            continue;
        }

        matches.push(build_match(&cells, layout, year));
    }

    matches
}

/// Read and parse a spreadsheet export from a file path.
pub fn parse_schedule_file(
    path: &Path,
    layout: &RowLayout,
    year: i32,
) -> Result<Vec<Match>, ImportError> {
    let content = std::fs::read_to_string(path).map_err(|e| ImportError::io(path, e))?;
    Ok(parse_schedule_csv(&content, layout, year))
}
