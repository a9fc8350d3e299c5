use super::{normalize::clean_cell, Row, Scalar, TabularDataset};
use crate::error::FetchError;
use csv::ReaderBuilder;
use std::io::Cursor;
use tracing::debug;

/// Parse CSV text whose first record is the header row.
///
/// Headers are normalized, cells trimmed and typed. Rows where every cell is
/// blank are skipped (published spreadsheets pad with them).
pub fn parse_dataset(text: &str) -> Result<TabularDataset, FetchError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(text.as_bytes()));

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(FetchError::NoHeader);
    }

    let mut rows: Vec<Row> = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.records() {
        let record = result?;
        let row: Row = record
            .iter()
            .map(|cell| Scalar::infer(&clean_cell(cell)))
            .collect();
        if row.iter().all(Scalar::is_blank) {
            skipped += 1;
            continue;
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(FetchError::Empty);
    }
    debug!(rows = rows.len(), skipped, columns = headers.len(), "parsed csv");

    Ok(TabularDataset::new(&headers, rows)?)
}
