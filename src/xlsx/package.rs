//! OPC package writing.
//!
//! Assembles workbook parts into the ZIP container, tracking content-type
//! overrides for the `[Content_Types].xml` part written on finish.

use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Seek, Write};

use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::Result;

use super::xml::escape_xml;

/// OPC content types used by the workbook parts.
pub mod content_type {
    pub const WORKBOOK: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
    pub const WORKSHEET: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
    pub const STYLES: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";
    pub const SHARED_STRINGS: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml";
    pub const DRAWING: &str = "application/vnd.openxmlformats-officedocument.drawing+xml";
    pub const CHART: &str = "application/vnd.openxmlformats-officedocument.drawingml.chart+xml";
}

/// OPC relationship types used by the workbook parts.
pub mod relationship_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const WORKSHEET: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const SHARED_STRINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings";
    pub const DRAWING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing";
    pub const CHART: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/chart";
}

/// A relationship entry in a `.rels` part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship id ("rId1", "rId2", ...)
    pub id: String,
    /// Relationship type URI
    pub rel_type: &'static str,
    /// Target part, relative to the source part
    pub target: String,
}

impl Relationship {
    /// Create a new relationship entry.
    #[inline]
    pub fn new(id: impl Into<String>, rel_type: &'static str, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rel_type,
            target: target.into(),
        }
    }
}

/// Builder for the OPC package (ZIP archive).
///
/// Parts added via [`PackageWriter::add_part`] get an Override entry in
/// `[Content_Types].xml`; relationship parts are covered by the Default
/// entry for the `rels` extension.
pub struct PackageWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    overrides: Vec<(String, &'static str)>,
}

impl PackageWriter<Cursor<Vec<u8>>> {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            overrides: Vec::new(),
        }
    }

    /// Finish writing and return the package bytes.
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PackageWriter<Cursor<Vec<u8>>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Seek> PackageWriter<W> {
    /// Add a part and register its content type.
    pub fn add_part(&mut self, path: &str, content_type: &'static str, content: &[u8]) -> Result<()> {
        self.overrides.push((format!("/{path}"), content_type));
        self.write_file(path, content)
    }

    /// Add a relationships part at `path` (e.g. "_rels/.rels").
    pub fn add_relationships(&mut self, path: &str, relationships: &[Relationship]) -> Result<()> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for rel in relationships {
            write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.id),
                rel.rel_type,
                escape_xml(&rel.target)
            )?;
        }
        xml.push_str("</Relationships>");
        self.write_file(path, xml.as_bytes())
    }

    fn write_file(&mut self, path: &str, content: &[u8]) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip.start_file(path, options)?;
        self.zip.write_all(content)?;
        Ok(())
    }

    fn content_types_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push_str(
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
        );
        xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
        for (part_name, content_type) in &self.overrides {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(part_name),
                content_type
            );
        }
        xml.push_str("</Types>");
        xml
    }

    /// Write `[Content_Types].xml` and finalize the archive.
    pub fn finish(mut self) -> Result<W> {
        let content_types = self.content_types_xml();
        self.write_file("[Content_Types].xml", content_types.as_bytes())?;
        Ok(self.zip.finish()?)
    }
}
