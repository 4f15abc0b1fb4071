//! Normalization of raw model replies.
//!
//! Models frequently wrap their JSON answer in markdown code fences despite
//! being told not to, and occasionally ignore the JSON contract entirely and
//! answer with bare CSV. Both shapes are handled here: fences are stripped
//! before parsing, and a failed JSON parse becomes an explicit
//! [`ModelReply::RawFallback`] instead of an error, so the caller can warn
//! the user while the conversion still proceeds.

use serde::Deserialize;

/// Structured record extracted from a model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Free-text chart-type label, lower-cased. Mapped onto a supported
    /// kind by [`crate::chart::ChartKind::from_label`].
    pub chart_label: String,
    /// Raw CSV payload (first line = header).
    pub csv_data: String,
    /// Hex colors aligned positionally with the CSV data rows. May be empty.
    pub colors: Vec<String>,
}

/// Outcome of normalizing a model reply.
///
/// `RawFallback` is the degraded mode of the pipeline: the reply was not
/// valid JSON, so the whole cleaned text is treated as the CSV payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    /// The reply parsed as the expected JSON object.
    Structured(Extraction),
    /// The reply was not valid JSON; holds the cleaned text verbatim.
    RawFallback(String),
}

/// Intermediate type for JSON deserialization of the reply object.
#[derive(Deserialize)]
struct RawReply {
    #[serde(default = "default_chart_type")]
    chart_type: String,
    #[serde(default)]
    csv_data: String,
    #[serde(default)]
    colors: Vec<String>,
}

fn default_chart_type() -> String {
    "bar".to_string()
}

impl ModelReply {
    /// Normalize raw model output.
    ///
    /// Never fails: anything that does not parse as the expected JSON object
    /// becomes a `RawFallback` carrying the fence-stripped, trimmed text.
    pub fn parse(raw: &str) -> ModelReply {
        let content = strip_code_fences(raw);
        match serde_json::from_str::<RawReply>(content) {
            Ok(reply) => ModelReply::Structured(Extraction {
                chart_label: reply.chart_type.to_lowercase(),
                csv_data: reply.csv_data,
                colors: reply.colors,
            }),
            Err(_) => ModelReply::RawFallback(content.to_string()),
        }
    }

    /// Whether the degraded raw-CSV path was taken.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        matches!(self, ModelReply::RawFallback(_))
    }

    /// Convert into an [`Extraction`] with effective defaults.
    ///
    /// A fallback reply yields chart label "bar", no colors, and the cleaned
    /// text as the CSV payload.
    pub fn into_extraction(self) -> Extraction {
        match self {
            ModelReply::Structured(extraction) => extraction,
            ModelReply::RawFallback(text) => Extraction {
                chart_label: "bar".to_string(),
                csv_data: text,
                colors: Vec::new(),
            },
        }
    }
}

/// Strip markdown code fences if present, then trim.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let content = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    content.strip_suffix("```").unwrap_or(content).trim()
}
