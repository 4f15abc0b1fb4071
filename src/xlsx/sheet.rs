//! Worksheet XML generation, including the shared-strings part the text
//! cells refer into.

use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

use crate::error::Result;
use crate::table::{ColumnKind, Table};

use super::xml::escape_xml;

/// Deduplicating string table backing the worksheet's text cells.
///
/// A text cell is written as `<c t="s"><v>index</v></c>`; the string itself
/// is stored once, in the sharedStrings.xml part this table renders.
#[derive(Debug, Default)]
pub struct SharedStrings {
    entries: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl SharedStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning the index its cells refer to.
    pub fn intern(&mut self, text: &str) -> usize {
        if let Some(&index) = self.lookup.get(text) {
            return index;
        }
        let index = self.entries.len();
        self.lookup.insert(text.to_owned(), index);
        self.entries.push(text.to_owned());
        index
    }

    /// Render the sharedStrings.xml part.
    pub fn part_xml(&self) -> Result<String> {
        let unique = self.entries.len();
        let mut xml = String::with_capacity(256 + 16 * unique);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{unique}" uniqueCount="{unique}">"#
        )?;
        for entry in &self.entries {
            write!(xml, "<si><t>{}</t></si>", escape_xml(entry))?;
        }
        xml.push_str("</sst>");
        Ok(xml)
    }
}

/// Convert a 0-based column index to its letter form ("A", "B", ..., "AA").
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = String::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters
}

/// Cell reference from 0-based row and column indices ("A1", "C4").
pub fn cell_ref(row: usize, col: usize) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// Generate the sheet1.xml part for a table.
///
/// The table is written from A1: header row first, then the data rows in
/// insertion order. Text cells go through the shared strings table; numeric
/// cells are written as plain values. When `with_drawing` is set the sheet
/// references the drawing part that anchors the chart (relationship rId1
/// of the sheet).
pub fn worksheet_xml(
    table: &Table,
    strings: &mut SharedStrings,
    with_drawing: bool,
) -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
    );
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    let last_col = table.columns().len().saturating_sub(1);
    write!(
        xml,
        r#"<dimension ref="A1:{}"/>"#,
        cell_ref(table.row_count(), last_col)
    )?;

    xml.push_str("<sheetData>");

    // Header row.
    xml.push_str(r#"<row r="1">"#);
    for (col, column) in table.columns().iter().enumerate() {
        let index = strings.intern(&column.name);
        write!(
            xml,
            r#"<c r="{}" t="s"><v>{}</v></c>"#,
            cell_ref(0, col),
            index
        )?;
    }
    xml.push_str("</row>");

    // Data rows.
    for (row, cells) in table.rows().iter().enumerate() {
        write!(xml, r#"<row r="{}">"#, row + 2)?;
        for (col, cell) in cells.iter().enumerate() {
            let reference = cell_ref(row + 1, col);
            match table.columns()[col].kind {
                ColumnKind::Numeric => {
                    let value: f64 = fast_float2::parse(cell.trim()).unwrap_or(0.0);
                    write!(xml, r#"<c r="{}"><v>{}</v></c>"#, reference, value)?;
                },
                ColumnKind::Categorical => {
                    let index = strings.intern(cell);
                    write!(xml, r#"<c r="{}" t="s"><v>{}</v></c>"#, reference, index)?;
                },
            }
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData>");

    if with_drawing {
        xml.push_str(r#"<drawing r:id="rId1"/>"#);
    }

    xml.push_str("</worksheet>");

    Ok(xml)
}
