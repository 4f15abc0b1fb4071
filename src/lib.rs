//! Replot - rebuild charts recognized in images as native spreadsheet charts
//!
//! This library is the post-processing half of an image-to-spreadsheet
//! converter. A vision-capable model (invoked by the caller, out of scope
//! here) looks at an uploaded chart or table and replies with text that
//! loosely conforms to a small JSON contract. Replot turns that reply into
//! an XLSX workbook containing the extracted table and, when the table has
//! numeric series, a native chart object styled after the recognized chart.
//!
//! # Pipeline
//!
//! - [`extract::response`]: strip markdown fences and parse the reply,
//!   falling back to treating the whole text as CSV when it is not JSON
//! - [`table`]: load the CSV payload into a typed table
//! - [`chart::kind`] / [`chart::spec`]: map the free-text chart label onto a
//!   supported chart kind and pick category/series columns
//! - [`chart`] + [`xlsx`]: emit the workbook with the chart anchored next to
//!   the data, applying per-point colors when the model reported them
//!
//! # Example
//!
//! ```
//! use replot::convert_reply;
//!
//! let reply = r#"{"chart_type": "column", "csv_data": "Category,Value\nA,5\nB,15\nC,10\n", "colors": []}"#;
//! let conversion = convert_reply(reply)?;
//!
//! assert!(conversion.chart_attached);
//! assert!(!conversion.degraded);
//! // conversion.workbook holds the XLSX bytes, ready to hand to the caller
//! # Ok::<(), replot::Error>(())
//! ```

pub mod chart;
pub mod convert;
pub mod error;
pub mod extract;
pub mod table;
pub mod xlsx;

pub use chart::{Chart, ChartKind, ChartSpec, ColorError};
pub use convert::{Conversion, convert_extraction, convert_reply};
pub use error::{Error, Result};
pub use extract::{Extraction, ModelReply};
pub use table::{Column, ColumnKind, Table};
