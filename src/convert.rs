//! End-to-end conversion of a model reply into a workbook.

use crate::chart::{Chart, ChartKind, ChartSpec, ColorError};
use crate::error::Result;
use crate::extract::{Extraction, ModelReply};
use crate::table::Table;
use crate::xlsx::WorkbookBuilder;

/// Result of one conversion: workbook bytes plus a report of what happened
/// along the way.
#[derive(Debug)]
pub struct Conversion {
    /// Finished `.xlsx` package bytes.
    pub workbook: Vec<u8>,
    /// Chart kind the free-text label was mapped to.
    pub kind: ChartKind,
    /// True when the reply was not valid JSON and the raw-CSV fallback was
    /// used. The workbook is still produced; callers may want to warn.
    pub degraded: bool,
    /// False when the table had no numeric series, in which case the
    /// workbook holds the bare table and no chart object.
    pub chart_attached: bool,
    /// Set when the reported colors could not be applied. The chart was
    /// still emitted, with automatic coloring.
    pub color_failure: Option<ColorError>,
}

/// Convert raw model output into a workbook.
///
/// The only fatal failure is unusable tabular data
/// ([`crate::Error::InvalidTabularData`]); a malformed reply degrades to the
/// raw-CSV fallback and a chartless table is a valid outcome.
pub fn convert_reply(raw: &str) -> Result<Conversion> {
    let reply = ModelReply::parse(raw);
    let degraded = reply.is_fallback();
    convert(reply.into_extraction(), degraded)
}

/// Convert an already-normalized extraction.
pub fn convert_extraction(extraction: Extraction) -> Result<Conversion> {
    convert(extraction, false)
}

fn convert(extraction: Extraction, degraded: bool) -> Result<Conversion> {
    let table = Table::from_csv(&extraction.csv_data)?;
    let kind = ChartKind::from_label(&extraction.chart_label);
    let spec = ChartSpec::from_table(&table, kind, extraction.colors);

    let mut color_failure = None;
    let chart = if spec.has_series() {
        let mut chart = Chart::assemble(&table, &spec);
        if let Some(ref mut chart) = chart {
            if let Err(err) = chart.apply_point_colors(&spec.colors, table.row_count()) {
                color_failure = Some(err);
            }
        }
        chart
    } else {
        None
    };
    let chart_attached = chart.is_some();

    let workbook = WorkbookBuilder::new(table)
        .with_chart(chart)
        .save_to_buffer()?;

    Ok(Conversion {
        workbook,
        kind,
        degraded,
        chart_attached,
        color_failure,
    })
}
