//! Custom error types for the dataset analyzer.
//!
//! This module provides the error hierarchy using `thiserror`. The two
//! not-found variants are the ones the driver recovers from; everything else
//! is reported to the user as an unexpected failure.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for loading and analyzing the dataset.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// A specific dataset path does not exist.
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// None of the candidate dataset paths could be loaded.
    #[error(
        "diabetes.csv not found in common paths!\nPlease place the file in one of these locations:\n{}",
        format_attempted(.attempted)
    )]
    DatasetNotFound { attempted: Vec<String> },

    /// The file parsed, but not into the fixed number of columns.
    #[error("Expected {expected} columns in {}, found {found}", .path.display())]
    ColumnCountMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AnalyzerError>,
    },
}

fn format_attempted(attempted: &[String]) -> String {
    attempted
        .iter()
        .map(|p| format!("  - {p}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl AnalyzerError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AnalyzerError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable code for each error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::DatasetNotFound { .. } => "DATASET_NOT_FOUND",
            Self::ColumnCountMismatch { .. } => "COLUMN_COUNT_MISMATCH",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Polars(_) => "POLARS_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error means the dataset file could not be found.
    ///
    /// Every other error is treated as unexpected by the CLI.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::DatasetNotFound { .. } => true,
            Self::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

impl From<crate::config::ConfigValidationError> for AnalyzerError {
    fn from(err: crate::config::ConfigValidationError) -> Self {
        AnalyzerError::InvalidConfig(err.to_string())
    }
}

/// Result type alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AnalyzerError::Polars(e).with_context(context))
    }
}
