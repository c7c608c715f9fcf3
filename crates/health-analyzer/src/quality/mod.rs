//! Data quality checks.
//!
//! This module flags zeros in measurement columns, where zero encodes a
//! missing value, and reports the observed range of key columns.

mod checker;

pub use checker::QualityChecker;
