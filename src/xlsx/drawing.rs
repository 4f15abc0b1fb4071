//! Drawing part anchoring the chart onto the worksheet.

use std::fmt::Write as FmtWrite;

use crate::error::Result;

/// Anchor column of the chart frame, 0-based (column E: a few columns to
/// the right of the table data).
pub const ANCHOR_COL: u32 = 4;
/// Anchor row of the chart frame, 0-based (row 2).
pub const ANCHOR_ROW: u32 = 1;

// Extent of the frame in cells.
const ANCHOR_COLS: u32 = 8;
const ANCHOR_ROWS: u32 = 15;

/// Generate the drawing1.xml part holding the chart frame.
///
/// The chart part is relationship rId1 of the drawing.
pub fn drawing_xml() -> Result<String> {
    let mut xml = String::with_capacity(1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<xdr:wsDr xmlns:xdr="http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing" "#,
    );
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">"#);

    xml.push_str("<xdr:twoCellAnchor>");
    write!(
        xml,
        "<xdr:from><xdr:col>{}</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>{}</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:from>",
        ANCHOR_COL, ANCHOR_ROW
    )?;
    write!(
        xml,
        "<xdr:to><xdr:col>{}</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>{}</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:to>",
        ANCHOR_COL + ANCHOR_COLS,
        ANCHOR_ROW + ANCHOR_ROWS
    )?;

    xml.push_str(r#"<xdr:graphicFrame macro="">"#);
    xml.push_str("<xdr:nvGraphicFramePr>");
    xml.push_str(r#"<xdr:cNvPr id="2" name="Chart 1"/>"#);
    xml.push_str("<xdr:cNvGraphicFramePr/>");
    xml.push_str("</xdr:nvGraphicFramePr>");
    xml.push_str(r#"<xdr:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/></xdr:xfrm>"#);
    xml.push_str("<a:graphic>");
    xml.push_str(
        r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/chart">"#,
    );
    xml.push_str(
        r#"<c:chart xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" r:id="rId1"/>"#,
    );
    xml.push_str("</a:graphicData>");
    xml.push_str("</a:graphic>");
    xml.push_str("</xdr:graphicFrame>");
    xml.push_str("<xdr:clientData/>");
    xml.push_str("</xdr:twoCellAnchor>");

    xml.push_str("</xdr:wsDr>");

    Ok(xml)
}
