//! Workbook assembly.

use crate::chart::Chart;
use crate::chart::writer::write_chart;
use crate::error::Result;
use crate::table::Table;

use super::drawing::drawing_xml;
use super::package::{PackageWriter, Relationship, content_type, relationship_type};
use super::sheet::{SharedStrings, worksheet_xml};

/// Builds the single-sheet workbook package for a table and an optional
/// chart.
#[derive(Debug)]
pub struct WorkbookBuilder {
    table: Table,
    chart: Option<Chart>,
}

impl WorkbookBuilder {
    /// Create a builder for a table.
    pub fn new(table: Table) -> Self {
        Self { table, chart: None }
    }

    /// Attach a chart, if one was assembled.
    pub fn with_chart(mut self, chart: Option<Chart>) -> Self {
        self.chart = chart;
        self
    }

    /// Assemble all parts and return the package bytes.
    ///
    /// The sheet is always named "Sheet1" with the table at A1. Drawing and
    /// chart parts are only written when a chart is attached.
    pub fn save_to_buffer(&self) -> Result<Vec<u8>> {
        let mut strings = SharedStrings::new();
        let sheet_xml = worksheet_xml(&self.table, &mut strings, self.chart.is_some())?;

        let mut package = PackageWriter::new();

        package.add_relationships(
            "_rels/.rels",
            &[Relationship::new(
                "rId1",
                relationship_type::OFFICE_DOCUMENT,
                "xl/workbook.xml",
            )],
        )?;

        package.add_part(
            "xl/workbook.xml",
            content_type::WORKBOOK,
            workbook_xml().as_bytes(),
        )?;
        package.add_relationships(
            "xl/_rels/workbook.xml.rels",
            &[
                Relationship::new(
                    "rId1",
                    relationship_type::WORKSHEET,
                    "worksheets/sheet1.xml",
                ),
                Relationship::new("rId2", relationship_type::STYLES, "styles.xml"),
                Relationship::new(
                    "rId3",
                    relationship_type::SHARED_STRINGS,
                    "sharedStrings.xml",
                ),
            ],
        )?;

        package.add_part(
            "xl/worksheets/sheet1.xml",
            content_type::WORKSHEET,
            sheet_xml.as_bytes(),
        )?;
        package.add_part("xl/styles.xml", content_type::STYLES, STYLES_XML.as_bytes())?;
        package.add_part(
            "xl/sharedStrings.xml",
            content_type::SHARED_STRINGS,
            strings.part_xml()?.as_bytes(),
        )?;

        if let Some(ref chart) = self.chart {
            package.add_relationships(
                "xl/worksheets/_rels/sheet1.xml.rels",
                &[Relationship::new(
                    "rId1",
                    relationship_type::DRAWING,
                    "../drawings/drawing1.xml",
                )],
            )?;
            package.add_part(
                "xl/drawings/drawing1.xml",
                content_type::DRAWING,
                drawing_xml()?.as_bytes(),
            )?;
            package.add_relationships(
                "xl/drawings/_rels/drawing1.xml.rels",
                &[Relationship::new(
                    "rId1",
                    relationship_type::CHART,
                    "../charts/chart1.xml",
                )],
            )?;

            let mut chart_bytes = Vec::with_capacity(4096);
            write_chart(&mut chart_bytes, chart)?;
            package.add_part("xl/charts/chart1.xml", content_type::CHART, &chart_bytes)?;
        }

        package.finish_to_bytes()
    }
}

/// The workbook.xml part: one sheet, fixed name.
fn workbook_xml() -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#);
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );
    xml.push_str(r#"<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>"#);
    xml.push_str("</workbook>");
    xml
}

/// Minimal stylesheet; every cell uses the default format.
const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    r#"<fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>"#,
    r#"<fills count="2"><fill><patternFill patternType="none"/></fill>"#,
    r#"<fill><patternFill patternType="gray125"/></fill></fills>"#,
    r#"<borders count="1"><border/></borders>"#,
    r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
    r#"<cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>"#,
    r#"</styleSheet>"#,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn part_names(bytes: &[u8]) -> Vec<String> {
        let archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn chartless_workbook_has_no_drawing_parts() {
        let table = Table::from_csv("Name,City\nAda,London\n").unwrap();
        let bytes = WorkbookBuilder::new(table).save_to_buffer().unwrap();
        let names = part_names(&bytes);
        assert!(names.contains(&"xl/worksheets/sheet1.xml".to_string()));
        assert!(names.contains(&"xl/sharedStrings.xml".to_string()));
        assert!(!names.iter().any(|n| n.contains("chart")));
        assert!(!names.iter().any(|n| n.contains("drawing")));
    }

    #[test]
    fn chart_adds_drawing_and_chart_parts() {
        use crate::chart::{Chart, ChartKind, ChartSpec};

        let table = Table::from_csv("Category,Value\nA,5\nB,15\n").unwrap();
        let spec = ChartSpec::from_table(&table, ChartKind::Column, Vec::new());
        let chart = Chart::assemble(&table, &spec);
        let bytes = WorkbookBuilder::new(table)
            .with_chart(chart)
            .save_to_buffer()
            .unwrap();
        let names = part_names(&bytes);
        assert!(names.contains(&"xl/charts/chart1.xml".to_string()));
        assert!(names.contains(&"xl/drawings/drawing1.xml".to_string()));
        assert!(names.contains(&"xl/worksheets/_rels/sheet1.xml.rels".to_string()));
    }
}
