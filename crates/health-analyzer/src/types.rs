//! Core types: the fixed dataset schema, the loaded record table, and the
//! values computed by the reporter and quality checker.

use polars::prelude::*;
use std::path::{Path, PathBuf};

// =============================================================================
// Schema
// =============================================================================

/// Column names assigned to every loaded file, in order.
pub const COLUMN_NAMES: [&str; 9] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
    "Outcome",
];

/// Binary label column.
pub const OUTCOME_COLUMN: &str = "Outcome";

/// Measurements where zero is physiologically impossible and stands in for
/// a missing value.
pub const ZERO_INVALID_COLUMNS: [&str; 5] =
    ["Glucose", "BloodPressure", "SkinThickness", "Insulin", "BMI"];

/// Columns whose observed min/max are reported.
pub const RANGE_COLUMNS: [&str; 3] = ["Age", "BMI", "Glucose"];

// =============================================================================
// Record Table
// =============================================================================

/// The loaded dataset. Read-only once constructed.
#[derive(Debug, Clone)]
pub struct RecordTable {
    frame: DataFrame,
    source: PathBuf,
}

static_assertions::assert_impl_all!(RecordTable: Send, Sync);

impl RecordTable {
    pub(crate) fn new(frame: DataFrame, source: PathBuf) -> Self {
        Self { frame, source }
    }

    /// The underlying frame.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Path the table was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.frame
            .get_columns()
            .iter()
            .map(|c| c.name().as_str())
            .collect()
    }
}

// =============================================================================
// Summary Types
// =============================================================================

/// Shape and memory footprint of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetOverview {
    pub rows: usize,
    pub columns: usize,
    pub memory_kb: f64,
}

/// Name and Polars dtype of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnType {
    pub name: String,
    pub dtype: DataType,
}

/// Descriptive statistics of a numeric column. Nulls are excluded.
///
/// `std` is the sample standard deviation and is `None` when fewer than two
/// values are present; the other statistics are `None` for an all-null column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStatistics {
    pub name: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Null counts for the columns that have any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MissingValues {
    pub per_column: Vec<(String, usize)>,
    pub total: usize,
}

impl MissingValues {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Counts of the two outcome classes against the total row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDistribution {
    pub total: usize,
    pub healthy: usize,
    pub diabetes: usize,
}

impl ClassDistribution {
    pub fn healthy_percentage(&self) -> f64 {
        crate::utils::percentage(self.healthy, self.total)
    }

    pub fn diabetes_percentage(&self) -> f64 {
        crate::utils::percentage(self.diabetes, self.total)
    }
}

/// Everything the summary reporter computes, one field per section.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub overview: DatasetOverview,
    pub column_types: Vec<ColumnType>,
    /// Rows requested for the head section; `head` may hold fewer.
    pub head_rows: usize,
    pub head: DataFrame,
    pub statistics: Vec<ColumnStatistics>,
    pub missing: MissingValues,
    /// `None` when the table has no Outcome column.
    pub class_distribution: Option<ClassDistribution>,
}

// =============================================================================
// Quality Types
// =============================================================================

/// A measurement column containing zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroValueFinding {
    pub column: String,
    pub count: usize,
    pub percentage: f64,
}

/// Observed extent of a column. Bounds are `None` when it has no values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRange {
    pub column: String,
    pub dtype: DataType,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Result of the quality check.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityFindings {
    pub total_rows: usize,
    pub zero_values: Vec<ZeroValueFinding>,
    pub ranges: Vec<ValueRange>,
}
