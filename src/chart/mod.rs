//! Writable chart model and XML emission.
//!
//! [`kind`] maps the model's free-text label onto a supported chart kind,
//! [`spec`] decides which columns feed the category axis and the series, and
//! [`models`] + [`writer`] turn that into DrawingML chart XML.

pub mod kind;
pub mod models;
pub mod spec;
pub mod writer;

pub use kind::ChartKind;
pub use models::{Chart, ColorError, DataLabels, PointFill, Series};
pub use spec::ChartSpec;
