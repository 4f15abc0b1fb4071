//! Model-reply post-processing.
//!
//! The vision model is asked (see [`prompt`]) to answer with a JSON object
//! describing the chart it saw. [`response`] normalizes whatever text came
//! back into an [`Extraction`], falling back to a raw-CSV interpretation
//! when the reply is not valid JSON.

pub mod prompt;
pub mod response;

pub use prompt::EXTRACTION_PROMPT;
pub use response::{Extraction, ModelReply};
