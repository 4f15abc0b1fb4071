//! XLSX package emission.
//!
//! Writes the OPC parts of a single-sheet workbook: workbook and worksheet
//! XML, shared strings, a minimal stylesheet, and, when a chart exists,
//! the drawing that anchors it next to the data.

pub mod drawing;
pub mod package;
pub mod sheet;
pub mod workbook;
pub mod xml;

pub use package::{PackageWriter, Relationship};
pub use sheet::{SharedStrings, cell_ref, column_letter};
pub use workbook::WorkbookBuilder;
pub use xml::escape_xml;
