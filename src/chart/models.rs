//! Chart data models.
//!
//! Structures for the writable chart: series with cached values plus
//! `Sheet1!` source references, per-point fills, and data-label settings.

use thiserror::Error;

use crate::table::Table;
use crate::xlsx::column_letter;

use super::kind::ChartKind;
use super::spec::ChartSpec;

/// A color string could not be applied to chart points.
///
/// Always recovered by the caller: the chart is emitted uncolored instead
/// of aborting the conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not a 6-digit hex color (with or without a leading `#`).
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
}

/// A reference to a data source (cell range formula).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceRef {
    /// Formula reference (e.g., "Sheet1!$A$2:$A$10")
    pub formula: String,
}

impl DataSourceRef {
    /// Create a new data source reference.
    #[inline]
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
        }
    }
}

/// Numeric data with a source reference and cached values.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericData {
    /// Reference to the cell range holding the values
    pub source_ref: DataSourceRef,
    /// Cached numeric values
    pub values: Vec<f64>,
}

impl NumericData {
    /// Create a new numeric data set from a reference.
    #[inline]
    pub fn from_ref(formula: impl Into<String>) -> Self {
        Self {
            source_ref: DataSourceRef::new(formula),
            values: Vec::new(),
        }
    }

    /// Add cached values.
    #[inline]
    pub fn with_cached_values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }
}

/// String data with a source reference and cached values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringData {
    /// Reference to the cell range holding the strings
    pub source_ref: DataSourceRef,
    /// Cached string values
    pub values: Vec<String>,
}

impl StringData {
    /// Create a new string data set from a reference.
    #[inline]
    pub fn from_ref(formula: impl Into<String>) -> Self {
        Self {
            source_ref: DataSourceRef::new(formula),
            values: Vec::new(),
        }
    }

    /// Add cached values.
    #[inline]
    pub fn with_cached_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }
}

/// Solid fill applied to a single data point (bar, slice or marker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointFill {
    /// Index of the data point within its series
    pub index: u32,
    /// Upper-case RRGGBB hex, no `#`
    pub rgb: String,
}

/// Data label settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLabels {
    /// Show the value next to each point
    pub show_value: bool,
    /// Show the percentage share (proportion-style charts)
    pub show_percent: bool,
}

/// One data series: a named sequence of numeric values plotted against the
/// category axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Index of this series
    pub index: u32,
    /// Plot order of this series
    pub order: u32,
    /// Series name, referencing the header cell
    pub name: Option<StringData>,
    /// Category labels shared by all series of the chart
    pub categories: Option<StringData>,
    /// The numeric values
    pub values: NumericData,
    /// Per-point solid fills; empty means automatic coloring
    pub point_fills: Vec<PointFill>,
}

/// The writable chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Chart kind
    pub kind: ChartKind,
    /// Literal chart title
    pub title: String,
    /// Preset chart style
    pub style: Option<u32>,
    /// Vary color per data point. On from the start for pie/doughnut, where
    /// each slice gets its own automatic color; enabled for other kinds only
    /// when explicit point colors arrive.
    pub vary_colors: bool,
    /// The data series, one per series column
    pub series: Vec<Series>,
    /// Group-level data labels
    pub data_labels: Option<DataLabels>,
}

impl Chart {
    /// Build the chart model for a table and spec.
    ///
    /// Returns `None` when the spec has no series columns: the workbook is
    /// then emitted without a chart object. Colors are not applied here;
    /// see [`Chart::apply_point_colors`].
    pub fn assemble(table: &Table, spec: &ChartSpec) -> Option<Chart> {
        if !spec.has_series() {
            return None;
        }

        // Data rows start at sheet row 2; the header occupies row 1.
        let last_row = table.row_count() + 1;
        let cat = column_letter(spec.category_column);
        let categories = StringData::from_ref(format!("Sheet1!${cat}$2:${cat}${last_row}"))
            .with_cached_values(table.column_strings(spec.category_column));

        let series = spec
            .series_columns
            .iter()
            .enumerate()
            .map(|(pos, &col)| {
                let letter = column_letter(col);
                let name = StringData::from_ref(format!("Sheet1!${letter}$1"))
                    .with_cached_values(vec![table.columns()[col].name.clone()]);
                let values =
                    NumericData::from_ref(format!("Sheet1!${letter}$2:${letter}${last_row}"))
                        .with_cached_values(table.column_numbers(col));
                Series {
                    index: pos as u32,
                    order: pos as u32,
                    name: Some(name),
                    categories: Some(categories.clone()),
                    values,
                    point_fills: Vec::new(),
                }
            })
            .collect();

        let data_labels = spec.kind.is_proportional().then_some(DataLabels {
            show_value: true,
            show_percent: true,
        });

        Some(Chart {
            kind: spec.kind,
            title: spec.title(),
            style: spec.kind.preset_style(),
            vary_colors: spec.kind.is_proportional(),
            series,
            data_labels,
        })
    }

    /// Apply per-row colors to the data points of the first series.
    ///
    /// `colors[i]` fills point i, for i below both the row count and the
    /// color count; rows beyond the color list keep automatic coloring.
    /// Non-proportional kinds additionally get vary-color-per-point
    /// (proportional kinds already carry it). Only
    /// the first series is colored; later series of a multi-series bar or
    /// line chart keep their automatic color (documented behavior of the
    /// pipeline, kept as-is).
    ///
    /// On error nothing has been applied and the chart is still emittable.
    pub fn apply_point_colors(
        &mut self,
        colors: &[String],
        row_count: usize,
    ) -> Result<(), ColorError> {
        if colors.is_empty() || self.series.is_empty() {
            return Ok(());
        }

        let count = row_count.min(colors.len());
        let mut fills = Vec::with_capacity(count);
        for (index, color) in colors.iter().take(count).enumerate() {
            fills.push(PointFill {
                index: index as u32,
                rgb: normalize_hex(color)?,
            });
        }

        if !self.kind.is_proportional() {
            self.vary_colors = true;
        }
        self.series[0].point_fills = fills;
        Ok(())
    }
}

/// Strip a leading `#` and validate a 6-digit hex color.
fn normalize_hex(color: &str) -> Result<String, ColorError> {
    let hex = color.trim().trim_start_matches('#');
    if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(hex.to_ascii_uppercase())
    } else {
        Err(ColorError::InvalidHex(color.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;

    fn pie_chart() -> (Table, Chart) {
        let table = Table::from_csv("Label,Value\nA,10\nB,20\nC,30\n").unwrap();
        let spec = ChartSpec::from_table(&table, ChartKind::Pie, Vec::new());
        let chart = Chart::assemble(&table, &spec).unwrap();
        (table, chart)
    }

    #[test]
    fn assemble_builds_one_series_per_numeric_column() {
        let table = Table::from_csv("Region,Sales,Profit\nN,1,2\nS,3,4\n").unwrap();
        let spec = ChartSpec::from_table(&table, ChartKind::Column, Vec::new());
        let chart = Chart::assemble(&table, &spec).unwrap();

        assert_eq!(chart.series.len(), 2);
        assert_eq!(
            chart.series[0].values.source_ref.formula,
            "Sheet1!$B$2:$B$3"
        );
        assert_eq!(chart.series[1].values.values, vec![2.0, 4.0]);
        let cats = chart.series[0].categories.as_ref().unwrap();
        assert_eq!(cats.source_ref.formula, "Sheet1!$A$2:$A$3");
        assert_eq!(cats.values, vec!["N".to_string(), "S".to_string()]);
    }

    #[test]
    fn assemble_without_series_returns_none() {
        let table = Table::from_csv("Name,City\nAda,London\n").unwrap();
        let spec = ChartSpec::from_table(&table, ChartKind::Column, Vec::new());
        assert!(Chart::assemble(&table, &spec).is_none());
    }

    #[test]
    fn proportional_charts_get_value_and_percent_labels() {
        let (_, chart) = pie_chart();
        assert_eq!(
            chart.data_labels,
            Some(DataLabels {
                show_value: true,
                show_percent: true,
            })
        );
        // slices start on varied automatic colors
        assert!(chart.vary_colors);
    }

    #[test]
    fn non_proportional_charts_start_without_varied_colors() {
        let table = Table::from_csv("C,V\nA,1\nB,2\n").unwrap();
        let spec = ChartSpec::from_table(&table, ChartKind::Column, Vec::new());
        let chart = Chart::assemble(&table, &spec).unwrap();
        assert!(!chart.vary_colors);
    }

    #[test]
    fn colors_truncate_to_the_shorter_of_rows_and_colors() {
        let (table, mut chart) = pie_chart();
        let colors = vec!["#FF0000".to_string(), "#00FF00".to_string()];
        chart.apply_point_colors(&colors, table.row_count()).unwrap();

        let fills = &chart.series[0].point_fills;
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0], PointFill { index: 0, rgb: "FF0000".to_string() });
        assert_eq!(fills[1], PointFill { index: 1, rgb: "00FF00".to_string() });
        assert!(chart.vary_colors);
    }

    #[test]
    fn bar_coloring_sets_vary_colors_and_only_the_first_series() {
        let table = Table::from_csv("Region,Sales,Profit\nN,1,2\nS,3,4\n").unwrap();
        let spec = ChartSpec::from_table(&table, ChartKind::Column, Vec::new());
        let mut chart = Chart::assemble(&table, &spec).unwrap();

        let colors = vec!["112233".to_string(), "#AABBCC".to_string()];
        chart.apply_point_colors(&colors, table.row_count()).unwrap();

        assert!(chart.vary_colors);
        assert_eq!(chart.series[0].point_fills.len(), 2);
        assert_eq!(chart.series[0].point_fills[1].rgb, "AABBCC");
        assert!(chart.series[1].point_fills.is_empty());
    }

    #[test]
    fn invalid_hex_applies_nothing() {
        let (table, mut chart) = pie_chart();
        let colors = vec!["#FF0000".to_string(), "notahex".to_string()];
        let err = chart
            .apply_point_colors(&colors, table.row_count())
            .unwrap_err();
        assert_eq!(err, ColorError::InvalidHex("notahex".to_string()));
        assert!(chart.series[0].point_fills.is_empty());
        assert!(chart.vary_colors);
    }
}
