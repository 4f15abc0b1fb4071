//! Typed tabular data extracted from the model's CSV payload.

mod loader;

/// Inferred kind of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// String/object-typed column; candidate for the category axis.
    Categorical,
    /// Every data cell parses as a number; candidate for a data series.
    Numeric,
}

/// A named table column with its inferred kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text.
    pub name: String,
    /// Inferred kind.
    pub kind: ColumnKind,
}

/// An ordered table of raw cell text.
///
/// Row order is significant: per-row chart colors align positionally with
/// the data rows. All rows have exactly as many cells as there are columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub(crate) fn new(columns: Vec<Column>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// The declared columns, left to right.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of data rows (header excluded).
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The data rows in insertion order.
    #[inline]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Raw text of one cell.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    /// All cell texts of one column, top to bottom.
    pub fn column_strings(&self, col: usize) -> Vec<String> {
        self.rows.iter().map(|row| row[col].clone()).collect()
    }

    /// All cells of one column parsed as numbers.
    ///
    /// Intended for [`ColumnKind::Numeric`] columns, where every cell is
    /// known to parse; anything else comes back as 0.0.
    pub fn column_numbers(&self, col: usize) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| fast_float2::parse(row[col].trim()).unwrap_or(0.0))
            .collect()
    }
}
