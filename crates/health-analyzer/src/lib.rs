//! Diabetes Dataset Analyzer Library
//!
//! Exploratory statistics and simple data-quality checks for the Pima Indians
//! Diabetes dataset, built on Polars.
//!
//! # Overview
//!
//! A run is a single pass: load → describe → quality-check → print.
//!
//! - **Loading**: the CSV's header line is discarded and the nine fixed
//!   column names are assigned by position
//! - **Summary**: shape, memory, dtypes, head rows, descriptive statistics,
//!   missing values and the outcome class distribution
//! - **Quality**: zero counts in measurement columns where zero means
//!   "missing", plus value ranges for Age, BMI and Glucose
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use health_analyzer::{AnalyzerConfig, driver};
//!
//! let config = AnalyzerConfig::builder().build()?;
//! let analysis = driver::run(&config)?;
//! println!("{}", analysis.render()?);
//! ```
//!
//! Each stage can also be used on its own:
//!
//! ```rust,ignore
//! use health_analyzer::{DatasetLoader, QualityChecker, SummaryReporter};
//!
//! let table = DatasetLoader::load("data/diabetes.csv")?;
//! let summary = SummaryReporter::summarize(table.frame(), 5)?;
//! let findings = QualityChecker::check(table.frame())?;
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod loader;
pub mod profiler;
pub mod quality;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder, ConfigValidationError};
pub use driver::{Analysis, locate_dataset};
pub use error::{AnalyzerError, Result as AnalyzerResult, ResultExt};
pub use loader::DatasetLoader;
pub use profiler::SummaryReporter;
pub use quality::QualityChecker;
pub use reporting::ConsoleReport;
pub use types::{
    COLUMN_NAMES, ClassDistribution, ColumnStatistics, ColumnType, DatasetOverview,
    DatasetSummary, MissingValues, OUTCOME_COLUMN, QualityFindings, RANGE_COLUMNS, RecordTable,
    ValueRange, ZERO_INVALID_COLUMNS, ZeroValueFinding,
};
