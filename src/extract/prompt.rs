//! The extraction prompt sent to the vision model.
//!
//! The prompt defines the wire contract that [`super::response`] parses:
//! a bare JSON object with `chart_type`, `csv_data` and `colors`, where the
//! color order matches the row order of the CSV payload. Callers pass this
//! text to whatever model client they use; no network code lives here.

/// Instruction text for the vision model analyzing an uploaded chart image.
pub const EXTRACTION_PROMPT: &str = r##"Analyze this image. It contains a chart or table.
1. Identify the type of chart. Choose strictly from:
   ['bar', 'column', 'line', 'pie', 'doughnut', 'scatter', 'area', 'table']
   (Note: a 'doughnut' is a pie chart with a hole in the center).
2. Extract the data efficiently and accurately.
3. Extract the colors used for each category or series in the chart.
   Return them as hex codes (e.g., #FF0000).

Output the result ONLY as a VALID JSON object with the following structure:
{
    "chart_type": "detected_type",
    "csv_data": "raw_csv_string",
    "colors": ["#HexCode1", "#HexCode2", ...]
}

NOTE: the order of entries in 'colors' MUST match the order of data rows in
csv_data (excluding the header row).

Do not include markdown code blocks (like ```json).
Do not include any introductory text.
"##;
