//! End-to-end tests over the produced `.xlsx` packages.
//!
//! Parts are pulled back out of the zip and inspected either as raw XML
//! text or, for the worksheet, parsed back into a cell grid.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;

use replot::{ChartKind, ColorError, Error, convert_reply};

fn unzip_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn has_part(bytes: &[u8], name: &str) -> bool {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    archive.by_name(name).is_ok()
}

/// Collect the `<t>` texts of sharedStrings.xml, in index order.
fn shared_strings(bytes: &[u8]) -> Vec<String> {
    let xml = unzip_part(bytes, "xl/sharedStrings.xml");
    let mut reader = Reader::from_str(&xml);
    let mut strings = Vec::new();
    let mut in_text = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(ref e) if e.name().as_ref() == b"t" => in_text = true,
            Event::End(ref e) if e.name().as_ref() == b"t" => in_text = false,
            Event::Text(ref e) if in_text => {
                strings.push(String::from_utf8(e.to_vec()).unwrap())
            }
            Event::Eof => break,
            _ => {}
        }
    }
    strings
}

/// Parse the worksheet back into rows of cell values, resolving shared
/// strings.
fn sheet_grid(bytes: &[u8]) -> Vec<Vec<String>> {
    let strings = shared_strings(bytes);
    let xml = unzip_part(bytes, "xl/worksheets/sheet1.xml");
    let mut reader = Reader::from_str(&xml);

    let mut grid: Vec<Vec<String>> = Vec::new();
    let mut shared_cell = false;
    let mut in_value = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(ref e) => match e.name().as_ref() {
                b"row" => grid.push(Vec::new()),
                b"c" => {
                    shared_cell = e
                        .attributes()
                        .filter_map(|a| a.ok())
                        .any(|a| a.key.as_ref() == b"t" && a.value.as_ref() == b"s");
                }
                b"v" => in_value = true,
                _ => {}
            },
            Event::End(ref e) if e.name().as_ref() == b"v" => in_value = false,
            Event::Text(ref e) if in_value => {
                let text = String::from_utf8(e.to_vec()).unwrap();
                let value = if shared_cell {
                    strings[text.parse::<usize>().unwrap()].clone()
                } else {
                    text
                };
                grid.last_mut().unwrap().push(value);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    grid
}

#[test]
fn column_reply_produces_table_and_column_chart() {
    let raw = r#"{"chart_type": "column", "csv_data": "Category,Value\nA,5\nB,15\nC,10\n", "colors": []}"#;
    let conversion = convert_reply(raw).unwrap();
    assert!(!conversion.degraded);
    assert!(conversion.chart_attached);
    assert_eq!(conversion.kind, ChartKind::Column);

    let grid = sheet_grid(&conversion.workbook);
    assert_eq!(
        grid,
        vec![
            vec!["Category".to_string(), "Value".to_string()],
            vec!["A".to_string(), "5".to_string()],
            vec!["B".to_string(), "15".to_string()],
            vec!["C".to_string(), "10".to_string()],
        ]
    );

    let chart = unzip_part(&conversion.workbook, "xl/charts/chart1.xml");
    assert!(chart.contains(r#"<c:barDir val="col"/>"#));
    assert!(chart.contains("Extracted Column Chart"));
    assert!(chart.contains("Sheet1!$A$2:$A$4"));
    assert!(chart.contains("Sheet1!$B$2:$B$4"));
    assert!(!chart.contains("<c:dPt>"));
}

#[test]
fn pie_colors_become_per_point_fills_with_labels() {
    let raw = r##"{"chart_type": "pie", "csv_data": "Slice,Share\nA,30\nB,50\nC,20\n", "colors": ["#FF0000", "#00FF00"]}"##;
    let conversion = convert_reply(raw).unwrap();
    assert_eq!(conversion.kind, ChartKind::Pie);
    assert!(conversion.color_failure.is_none());

    let chart = unzip_part(&conversion.workbook, "xl/charts/chart1.xml");
    // Only two colors were reported for three slices.
    assert_eq!(chart.matches("<c:dPt>").count(), 2);
    assert!(chart.contains(r#"<a:srgbClr val="FF0000"/>"#));
    assert!(chart.contains(r#"<a:srgbClr val="00FF00"/>"#));
    assert!(chart.contains(r#"<c:showVal val="1"/>"#));
    assert!(chart.contains(r#"<c:showPercent val="1"/>"#));
    // Explicit fills take precedence; the group stays on varied coloring.
    assert!(chart.contains(r#"<c:varyColors val="1"/>"#));
}

#[test]
fn uncolored_pie_keeps_varied_slice_colors() {
    let raw = r#"{"chart_type": "pie", "csv_data": "Slice,Share\nA,30\nB,50\nC,20\n", "colors": []}"#;
    let conversion = convert_reply(raw).unwrap();

    let chart = unzip_part(&conversion.workbook, "xl/charts/chart1.xml");
    assert!(chart.contains(r#"<c:varyColors val="1"/>"#));
    assert!(!chart.contains("<c:dPt>"));
}

#[test]
fn colored_column_chart_varies_colors_and_fills_first_series_only() {
    let raw = r##"{"chart_type": "column", "csv_data": "Q,Rev,Cost\nQ1,10,4\nQ2,12,5\n", "colors": ["#112233", "#445566"]}"##;
    let conversion = convert_reply(raw).unwrap();
    let chart = unzip_part(&conversion.workbook, "xl/charts/chart1.xml");

    assert!(chart.contains(r#"<c:varyColors val="1"/>"#));
    // Fills land on the first series only; the second keeps theme colors.
    assert_eq!(chart.matches("<c:dPt>").count(), 2);
    let second_series = chart.split("<c:ser>").nth(2).unwrap();
    assert!(!second_series.contains("<c:dPt>"));
}

#[test]
fn doughnut_chart_gets_preset_style_and_hole() {
    let raw = r#"{"chart_type": "doughnut", "csv_data": "K,V\na,1\nb,2\n", "colors": []}"#;
    let conversion = convert_reply(raw).unwrap();
    assert_eq!(conversion.kind, ChartKind::Doughnut);

    let chart = unzip_part(&conversion.workbook, "xl/charts/chart1.xml");
    assert!(chart.contains(r#"<c:style val="26"/>"#));
    assert!(chart.contains("<c:doughnutChart>"));
    assert!(chart.contains(r#"<c:holeSize val="50"/>"#));
}

#[test]
fn raw_csv_fallback_yields_a_horizontal_bar_chart() {
    let conversion = convert_reply("Category,Value\nA,5\nB,15").unwrap();
    assert!(conversion.degraded);
    assert_eq!(conversion.kind, ChartKind::BarHorizontal);

    let chart = unzip_part(&conversion.workbook, "xl/charts/chart1.xml");
    assert!(chart.contains(r#"<c:barDir val="bar"/>"#));
    assert!(chart.contains("Extracted Bar Chart"));
}

#[test]
fn fenced_and_unfenced_replies_convert_identically() {
    let inner = r#"{"chart_type": "line", "csv_data": "X,Y\n1,2\n3,4\n", "colors": []}"#;
    let fenced = format!("```json\n{inner}\n```");

    let plain = convert_reply(inner).unwrap();
    let wrapped = convert_reply(&fenced).unwrap();
    assert!(!wrapped.degraded);
    assert_eq!(plain.kind, wrapped.kind);
    assert_eq!(
        sheet_grid(&plain.workbook),
        sheet_grid(&wrapped.workbook)
    );
}

#[test]
fn table_without_numbers_is_emitted_chartless() {
    let raw = r#"{"chart_type": "bar", "csv_data": "Name,City\nAda,London\nMax,Berlin\n", "colors": []}"#;
    let conversion = convert_reply(raw).unwrap();
    assert!(!conversion.chart_attached);
    assert!(!has_part(&conversion.workbook, "xl/charts/chart1.xml"));
    assert!(!has_part(&conversion.workbook, "xl/drawings/drawing1.xml"));

    let grid = sheet_grid(&conversion.workbook);
    assert_eq!(grid.len(), 3);
    assert_eq!(grid[2], vec!["Max".to_string(), "Berlin".to_string()]);
}

#[test]
fn inconsistent_rows_fail_with_the_raw_payload_attached() {
    let raw = r#"{"chart_type": "bar", "csv_data": "A,B\n1,2,3\n", "colors": []}"#;
    match convert_reply(raw).unwrap_err() {
        Error::InvalidTabularData { raw, .. } => assert!(raw.contains("1,2,3")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_colors_leave_the_chart_uncolored() {
    let raw = r##"{"chart_type": "pie", "csv_data": "K,V\na,1\nb,2\n", "colors": ["#GGGGGG"]}"##;
    let conversion = convert_reply(raw).unwrap();
    assert!(conversion.chart_attached);
    assert_eq!(
        conversion.color_failure,
        Some(ColorError::InvalidHex("#GGGGGG".to_string()))
    );

    let chart = unzip_part(&conversion.workbook, "xl/charts/chart1.xml");
    assert!(!chart.contains("<c:dPt>"));
}

#[test]
fn scatter_chart_plots_categories_as_x_values() {
    let raw = r#"{"chart_type": "scatter", "csv_data": "T,V\n1,10\n2,20\n", "colors": []}"#;
    let conversion = convert_reply(raw).unwrap();
    assert_eq!(conversion.kind, ChartKind::Scatter);

    let chart = unzip_part(&conversion.workbook, "xl/charts/chart1.xml");
    assert!(chart.contains("<c:scatterChart>"));
    assert!(chart.contains("<c:xVal>"));
    assert!(chart.contains("<c:yVal>"));
    assert!(!chart.contains("<c:catAx>"));
}

#[test]
fn package_declares_all_written_parts() {
    let raw = r#"{"chart_type": "line", "csv_data": "X,Y\n1,2\n", "colors": []}"#;
    let conversion = convert_reply(raw).unwrap();
    let types = unzip_part(&conversion.workbook, "[Content_Types].xml");

    for part in [
        "/xl/workbook.xml",
        "/xl/worksheets/sheet1.xml",
        "/xl/styles.xml",
        "/xl/sharedStrings.xml",
        "/xl/drawings/drawing1.xml",
        "/xl/charts/chart1.xml",
    ] {
        assert!(types.contains(part), "missing override for {part}");
    }
}
