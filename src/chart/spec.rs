//! Category/series selection over a loaded table.

use crate::table::{ColumnKind, Table};

use super::kind::ChartKind;

/// Which columns of a [`Table`] feed the chart, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    /// Mapped chart kind.
    pub kind: ChartKind,
    /// Index of the category-axis column.
    pub category_column: usize,
    /// Indices of the numeric data-series columns, in table order.
    /// Empty means no chart can be attached.
    pub series_columns: Vec<usize>,
    /// Per-row hex colors reported by the model; may be empty.
    pub colors: Vec<String>,
}

impl ChartSpec {
    /// Select category and series columns from a table.
    ///
    /// The category column is the first categorical column, defaulting to
    /// column 0 when every column is numeric. The series are every numeric
    /// column except the category column, in their original order.
    pub fn from_table(table: &Table, kind: ChartKind, colors: Vec<String>) -> ChartSpec {
        let category_column = table
            .columns()
            .iter()
            .position(|column| column.kind == ColumnKind::Categorical)
            .unwrap_or(0);

        let series_columns = table
            .columns()
            .iter()
            .enumerate()
            .filter(|(index, column)| {
                *index != category_column && column.kind == ColumnKind::Numeric
            })
            .map(|(index, _)| index)
            .collect();

        ChartSpec {
            kind,
            category_column,
            series_columns,
            colors,
        }
    }

    /// Whether any data series exist. When false the workbook is emitted
    /// without a chart object.
    #[inline]
    pub fn has_series(&self) -> bool {
        !self.series_columns.is_empty()
    }

    /// Chart title, e.g. "Extracted Column Chart".
    pub fn title(&self) -> String {
        format!("Extracted {} Chart", self.kind.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_categorical_column_is_the_category_axis() {
        let table = Table::from_csv("Region,Sales,Profit\nNorth,100,20\nSouth,80,15\n").unwrap();
        let spec = ChartSpec::from_table(&table, ChartKind::Column, Vec::new());
        assert_eq!(spec.category_column, 0);
        assert_eq!(spec.series_columns, vec![1, 2]);
    }

    #[test]
    fn all_numeric_table_uses_column_zero_as_category() {
        let table = Table::from_csv("X,Y\n1,2\n3,4\n").unwrap();
        let spec = ChartSpec::from_table(&table, ChartKind::Line, Vec::new());
        assert_eq!(spec.category_column, 0);
        assert_eq!(spec.series_columns, vec![1]);
    }

    #[test]
    fn table_without_numeric_columns_has_no_series() {
        let table = Table::from_csv("Name,City\nAda,London\n").unwrap();
        let spec = ChartSpec::from_table(&table, ChartKind::Pie, Vec::new());
        assert!(!spec.has_series());
        assert_eq!(spec.category_column, 0);
    }

    #[test]
    fn title_uses_the_mapped_kind_display_name() {
        let table = Table::from_csv("A,B\nx,1\n").unwrap();
        let spec = ChartSpec::from_table(&table, ChartKind::Doughnut, Vec::new());
        assert_eq!(spec.title(), "Extracted Doughnut Chart");
    }
}
