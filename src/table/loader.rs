//! CSV loading and column-kind inference.

use crate::error::{Error, Result};

use super::{Column, ColumnKind, Table};

impl Table {
    /// Parse a CSV payload (first line = header) into a typed table.
    ///
    /// A column is inferred [`ColumnKind::Numeric`] when the table has at
    /// least one data row and every cell of the column is non-empty and
    /// parses as a number; otherwise it is categorical. Malformed CSV,
    /// inconsistent row widths and zero-column input are all reported as
    /// [`Error::InvalidTabularData`] together with the raw text.
    pub fn from_csv(input: &str) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(input.as_bytes());

        let headers = reader
            .headers()
            .map_err(|err| invalid(err, input))?
            .clone();
        if headers.is_empty() {
            return Err(invalid("no columns found in header row", input));
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| invalid(err, input))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        let columns = headers
            .iter()
            .enumerate()
            .map(|(col, name)| Column {
                name: name.trim().to_string(),
                kind: infer_kind(&rows, col),
            })
            .collect();

        Ok(Table::new(columns, rows))
    }
}

fn invalid(reason: impl ToString, raw: &str) -> Error {
    Error::InvalidTabularData {
        reason: reason.to_string(),
        raw: raw.to_string(),
    }
}

/// Numeric iff there is at least one data row and every cell parses.
///
/// Empty cells disqualify a column: a blank in an otherwise numeric column
/// means the model left a gap, and a gap cannot feed a chart value cache.
fn infer_kind(rows: &[Vec<String>], col: usize) -> ColumnKind {
    if !rows.is_empty() && rows.iter().all(|row| is_numeric_cell(&row[col])) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

fn is_numeric_cell(cell: &str) -> bool {
    let trimmed = cell.trim();
    !trimmed.is_empty() && fast_float2::parse::<f64, _>(trimmed).is_ok()
}
