//! Unified error types for the conversion pipeline.
use thiserror::Error;

/// Main error type for Replot operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV payload could not be loaded as a table.
    ///
    /// Carries the raw offending text so callers can show the user what the
    /// model actually produced. This is the only condition that halts a
    /// conversion; everything else degrades to a still-usable workbook.
    #[error("invalid tabular data: {reason}")]
    InvalidTabularData { reason: String, raw: String },

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),
}

/// Result type for Replot operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
