//! Console report rendering.
//!
//! Turns a [`DatasetSummary`](crate::types::DatasetSummary) and
//! [`QualityFindings`](crate::types::QualityFindings) into the sectioned,
//! human-readable text the CLI prints. Rendering never touches stdout itself.

mod console;

pub use console::{ConsoleReport, SEPARATOR_WIDTH};
