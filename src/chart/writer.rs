//! Chart XML writer.
//!
//! Generates the `c:chartSpace` part for the workbook package.

use std::io::Write;

use crate::xlsx::escape_xml;

use super::kind::ChartKind;
use super::models::{Chart, DataLabels, NumericData, Series, StringData};

/// Write a chart to XML.
pub fn write_chart<W: Write>(writer: &mut W, chart: &Chart) -> std::io::Result<()> {
    write!(
        writer,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
    )?;
    write!(
        writer,
        r#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" "#
    )?;
    write!(
        writer,
        r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#
    )?;
    write!(
        writer,
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#
    )?;

    write!(writer, r#"<c:date1904 val="0"/>"#)?;
    write!(writer, r#"<c:lang val="en-US"/>"#)?;
    write!(writer, r#"<c:roundedCorners val="0"/>"#)?;

    if let Some(style) = chart.style {
        write!(writer, r#"<c:style val="{}"/>"#, style)?;
    }

    write!(writer, "<c:chart>")?;

    write_title(writer, &chart.title)?;
    write!(writer, r#"<c:autoTitleDeleted val="0"/>"#)?;

    write!(writer, "<c:plotArea>")?;
    write!(writer, "<c:layout/>")?;

    match chart.kind {
        ChartKind::BarHorizontal => write_bar_chart(writer, chart, "bar")?,
        ChartKind::Column => write_bar_chart(writer, chart, "col")?,
        ChartKind::Line => write_line_chart(writer, chart)?,
        ChartKind::Pie => write_pie_chart(writer, chart, false)?,
        ChartKind::Doughnut => write_pie_chart(writer, chart, true)?,
        ChartKind::Scatter => write_scatter_chart(writer, chart)?,
    }

    write_axes(writer, chart.kind)?;
    write!(writer, "</c:plotArea>")?;

    write!(writer, "<c:legend>")?;
    write!(writer, r#"<c:legendPos val="r"/>"#)?;
    write!(writer, r#"<c:overlay val="0"/>"#)?;
    write!(writer, "</c:legend>")?;

    write!(writer, r#"<c:plotVisOnly val="1"/>"#)?;
    write!(writer, r#"<c:dispBlanksAs val="gap"/>"#)?;

    write!(writer, "</c:chart>")?;

    write!(writer, "<c:printSettings>")?;
    write!(writer, "<c:headerFooter/>")?;
    write!(
        writer,
        r#"<c:pageMargins b="0.75" l="0.7" r="0.7" t="0.75" header="0.3" footer="0.3"/>"#
    )?;
    write!(writer, "<c:pageSetup/>")?;
    write!(writer, "</c:printSettings>")?;

    write!(writer, "</c:chartSpace>")?;

    Ok(())
}

fn write_title<W: Write>(writer: &mut W, title: &str) -> std::io::Result<()> {
    write!(writer, "<c:title>")?;
    write!(writer, "<c:tx><c:rich>")?;
    write!(writer, "<a:bodyPr/><a:lstStyle/>")?;
    write!(writer, "<a:p><a:pPr><a:defRPr/></a:pPr>")?;
    write!(
        writer,
        r#"<a:r><a:rPr lang="en-US"/><a:t>{}</a:t></a:r>"#,
        escape_xml(title)
    )?;
    write!(writer, "</a:p></c:rich></c:tx>")?;
    write!(writer, r#"<c:overlay val="0"/>"#)?;
    write!(writer, "</c:title>")?;
    Ok(())
}

fn write_bar_chart<W: Write>(writer: &mut W, chart: &Chart, direction: &str) -> std::io::Result<()> {
    write!(writer, "<c:barChart>")?;
    write!(writer, r#"<c:barDir val="{}"/>"#, direction)?;
    write!(writer, r#"<c:grouping val="clustered"/>"#)?;
    write!(
        writer,
        r#"<c:varyColors val="{}"/>"#,
        if chart.vary_colors { "1" } else { "0" }
    )?;

    for series in &chart.series {
        write_series(writer, series)?;
    }

    write_data_labels(writer, chart.data_labels.as_ref())?;
    write!(writer, r#"<c:gapWidth val="150"/>"#)?;
    write!(writer, r#"<c:axId val="1"/><c:axId val="2"/>"#)?;
    write!(writer, "</c:barChart>")?;

    Ok(())
}

fn write_line_chart<W: Write>(writer: &mut W, chart: &Chart) -> std::io::Result<()> {
    write!(writer, "<c:lineChart>")?;
    write!(writer, r#"<c:grouping val="standard"/>"#)?;
    write!(
        writer,
        r#"<c:varyColors val="{}"/>"#,
        if chart.vary_colors { "1" } else { "0" }
    )?;

    for series in &chart.series {
        write_series(writer, series)?;
    }

    write_data_labels(writer, chart.data_labels.as_ref())?;
    write!(writer, r#"<c:marker val="1"/>"#)?;
    write!(writer, r#"<c:axId val="1"/><c:axId val="2"/>"#)?;
    write!(writer, "</c:lineChart>")?;

    Ok(())
}

fn write_pie_chart<W: Write>(writer: &mut W, chart: &Chart, doughnut: bool) -> std::io::Result<()> {
    let element = if doughnut {
        "c:doughnutChart"
    } else {
        "c:pieChart"
    };
    write!(writer, "<{}>", element)?;
    write!(
        writer,
        r#"<c:varyColors val="{}"/>"#,
        if chart.vary_colors { "1" } else { "0" }
    )?;

    for series in &chart.series {
        write_series(writer, series)?;
    }

    write_data_labels(writer, chart.data_labels.as_ref())?;
    write!(writer, r#"<c:firstSliceAng val="0"/>"#)?;
    if doughnut {
        write!(writer, r#"<c:holeSize val="50"/>"#)?;
    }
    write!(writer, "</{}>", element)?;

    Ok(())
}

fn write_scatter_chart<W: Write>(writer: &mut W, chart: &Chart) -> std::io::Result<()> {
    write!(writer, "<c:scatterChart>")?;
    write!(writer, r#"<c:scatterStyle val="lineMarker"/>"#)?;
    write!(
        writer,
        r#"<c:varyColors val="{}"/>"#,
        if chart.vary_colors { "1" } else { "0" }
    )?;

    for series in &chart.series {
        write_scatter_series(writer, series)?;
    }

    write_data_labels(writer, chart.data_labels.as_ref())?;
    write!(writer, r#"<c:axId val="1"/><c:axId val="2"/>"#)?;
    write!(writer, "</c:scatterChart>")?;

    Ok(())
}

fn write_series<W: Write>(writer: &mut W, series: &Series) -> std::io::Result<()> {
    write!(writer, "<c:ser>")?;
    write!(writer, r#"<c:idx val="{}"/>"#, series.index)?;
    write!(writer, r#"<c:order val="{}"/>"#, series.order)?;

    write_series_name(writer, series)?;
    write_point_fills(writer, series)?;

    if let Some(ref categories) = series.categories {
        write_string_data_ref(writer, "c:cat", categories)?;
    }
    write_numeric_data_ref(writer, "c:val", &series.values)?;

    write!(writer, "</c:ser>")?;

    Ok(())
}

fn write_scatter_series<W: Write>(writer: &mut W, series: &Series) -> std::io::Result<()> {
    write!(writer, "<c:ser>")?;
    write!(writer, r#"<c:idx val="{}"/>"#, series.index)?;
    write!(writer, r#"<c:order val="{}"/>"#, series.order)?;

    write_series_name(writer, series)?;
    write_point_fills(writer, series)?;

    // The category column supplies the x values; a strRef is valid there.
    if let Some(ref categories) = series.categories {
        write_string_data_ref(writer, "c:xVal", categories)?;
    }
    write_numeric_data_ref(writer, "c:yVal", &series.values)?;

    write!(writer, "</c:ser>")?;

    Ok(())
}

fn write_series_name<W: Write>(writer: &mut W, series: &Series) -> std::io::Result<()> {
    if let Some(ref name) = series.name {
        write!(writer, "<c:tx><c:strRef>")?;
        write!(writer, "<c:f>{}</c:f>", escape_xml(&name.source_ref.formula))?;
        if let Some(text) = name.values.first() {
            write!(writer, r#"<c:strCache><c:ptCount val="1"/>"#)?;
            write!(
                writer,
                r#"<c:pt idx="0"><c:v>{}</c:v></c:pt>"#,
                escape_xml(text)
            )?;
            write!(writer, "</c:strCache>")?;
        }
        write!(writer, "</c:strRef></c:tx>")?;
    }
    Ok(())
}

fn write_point_fills<W: Write>(writer: &mut W, series: &Series) -> std::io::Result<()> {
    for fill in &series.point_fills {
        write!(writer, "<c:dPt>")?;
        write!(writer, r#"<c:idx val="{}"/>"#, fill.index)?;
        write!(writer, r#"<c:bubble3D val="0"/>"#)?;
        write!(
            writer,
            r#"<c:spPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill></c:spPr>"#,
            fill.rgb
        )?;
        write!(writer, "</c:dPt>")?;
    }
    Ok(())
}

fn write_string_data_ref<W: Write>(
    writer: &mut W,
    tag: &str,
    data: &StringData,
) -> std::io::Result<()> {
    write!(writer, "<{}>", tag)?;
    write!(writer, "<c:strRef>")?;
    write!(writer, "<c:f>{}</c:f>", escape_xml(&data.source_ref.formula))?;

    if !data.values.is_empty() {
        write!(writer, "<c:strCache>")?;
        write!(writer, r#"<c:ptCount val="{}"/>"#, data.values.len())?;
        for (i, val) in data.values.iter().enumerate() {
            write!(
                writer,
                r#"<c:pt idx="{}"><c:v>{}</c:v></c:pt>"#,
                i,
                escape_xml(val)
            )?;
        }
        write!(writer, "</c:strCache>")?;
    }

    write!(writer, "</c:strRef>")?;
    write!(writer, "</{}>", tag)?;

    Ok(())
}

fn write_numeric_data_ref<W: Write>(
    writer: &mut W,
    tag: &str,
    data: &NumericData,
) -> std::io::Result<()> {
    write!(writer, "<{}>", tag)?;
    write!(writer, "<c:numRef>")?;
    write!(writer, "<c:f>{}</c:f>", escape_xml(&data.source_ref.formula))?;

    if !data.values.is_empty() {
        write!(writer, "<c:numCache>")?;
        write!(writer, r#"<c:formatCode>General</c:formatCode>"#)?;
        write!(writer, r#"<c:ptCount val="{}"/>"#, data.values.len())?;
        for (i, val) in data.values.iter().enumerate() {
            write!(writer, r#"<c:pt idx="{}"><c:v>{}</c:v></c:pt>"#, i, val)?;
        }
        write!(writer, "</c:numCache>")?;
    }

    write!(writer, "</c:numRef>")?;
    write!(writer, "</{}>", tag)?;

    Ok(())
}

fn write_data_labels<W: Write>(
    writer: &mut W,
    labels: Option<&DataLabels>,
) -> std::io::Result<()> {
    let (show_value, show_percent) = labels
        .map(|l| (l.show_value, l.show_percent))
        .unwrap_or((false, false));

    write!(writer, "<c:dLbls>")?;
    write!(writer, r#"<c:showLegendKey val="0"/>"#)?;
    write!(
        writer,
        r#"<c:showVal val="{}"/>"#,
        if show_value { "1" } else { "0" }
    )?;
    write!(writer, r#"<c:showCatName val="0"/>"#)?;
    write!(writer, r#"<c:showSerName val="0"/>"#)?;
    write!(
        writer,
        r#"<c:showPercent val="{}"/>"#,
        if show_percent { "1" } else { "0" }
    )?;
    write!(writer, r#"<c:showBubbleSize val="0"/>"#)?;
    write!(writer, "</c:dLbls>")?;
    Ok(())
}

/// Write the axis pair matching the chart kind. Proportion-style kinds
/// have no axes at all.
fn write_axes<W: Write>(writer: &mut W, kind: ChartKind) -> std::io::Result<()> {
    match kind {
        ChartKind::Pie | ChartKind::Doughnut => Ok(()),
        ChartKind::Scatter => {
            write_value_axis(writer, 1, "b", 2)?;
            write_value_axis(writer, 2, "l", 1)
        },
        ChartKind::BarHorizontal => {
            write_category_axis(writer, 1, "l", 2)?;
            write_value_axis(writer, 2, "b", 1)
        },
        ChartKind::Column | ChartKind::Line => {
            write_category_axis(writer, 1, "b", 2)?;
            write_value_axis(writer, 2, "l", 1)
        },
    }
}

fn write_axis_common<W: Write>(
    writer: &mut W,
    axis_id: u32,
    position: &str,
    cross_axis_id: u32,
) -> std::io::Result<()> {
    write!(writer, r#"<c:axId val="{}"/>"#, axis_id)?;
    write!(writer, "<c:scaling>")?;
    write!(writer, r#"<c:orientation val="minMax"/>"#)?;
    write!(writer, "</c:scaling>")?;
    write!(writer, r#"<c:delete val="0"/>"#)?;
    write!(writer, r#"<c:axPos val="{}"/>"#, position)?;
    write!(writer, r#"<c:majorTickMark val="out"/>"#)?;
    write!(writer, r#"<c:minorTickMark val="none"/>"#)?;
    write!(writer, r#"<c:tickLblPos val="nextTo"/>"#)?;
    write!(writer, r#"<c:crossAx val="{}"/>"#, cross_axis_id)?;
    write!(writer, r#"<c:crosses val="autoZero"/>"#)?;
    Ok(())
}

fn write_category_axis<W: Write>(
    writer: &mut W,
    axis_id: u32,
    position: &str,
    cross_axis_id: u32,
) -> std::io::Result<()> {
    write!(writer, "<c:catAx>")?;
    write_axis_common(writer, axis_id, position, cross_axis_id)?;
    write!(writer, r#"<c:auto val="1"/>"#)?;
    write!(writer, r#"<c:lblAlgn val="ctr"/>"#)?;
    write!(writer, r#"<c:lblOffset val="100"/>"#)?;
    write!(writer, r#"<c:noMultiLvlLbl val="0"/>"#)?;
    write!(writer, "</c:catAx>")?;
    Ok(())
}

fn write_value_axis<W: Write>(
    writer: &mut W,
    axis_id: u32,
    position: &str,
    cross_axis_id: u32,
) -> std::io::Result<()> {
    write!(writer, "<c:valAx>")?;
    write_axis_common(writer, axis_id, position, cross_axis_id)?;
    write!(writer, r#"<c:crossBetween val="between"/>"#)?;
    write!(writer, "</c:valAx>")?;
    Ok(())
}
