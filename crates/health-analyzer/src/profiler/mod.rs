//! Dataset summary.
//!
//! This module computes the descriptive part of the report:
//! - Shape and memory footprint
//! - Column data types and the first rows
//! - Descriptive statistics per numeric column
//! - Missing-value counts and the outcome class distribution

mod statistics;

use crate::error::Result;
use crate::types::{
    ClassDistribution, ColumnType, DatasetOverview, DatasetSummary, MissingValues,
    OUTCOME_COLUMN,
};
use crate::utils::{is_numeric_dtype, numeric_values};
use polars::prelude::*;
use tracing::debug;

use statistics::describe_column;

/// Computes the summary sections for a table.
pub struct SummaryReporter;

impl SummaryReporter {
    /// Compute every summary section, showing `head_rows` rows in the head.
    pub fn summarize(df: &DataFrame, head_rows: usize) -> Result<DatasetSummary> {
        let statistics = df
            .get_columns()
            .iter()
            .filter(|col| is_numeric_dtype(col.dtype()))
            .map(describe_column)
            .collect::<PolarsResult<Vec<_>>>()?;
        debug!("Described {} numeric columns", statistics.len());

        Ok(DatasetSummary {
            overview: Self::overview(df),
            column_types: Self::column_types(df),
            head_rows,
            head: df.head(Some(head_rows)),
            statistics,
            missing: Self::missing_values(df),
            class_distribution: Self::class_distribution(df)?,
        })
    }

    /// Row and column count plus the estimated in-memory size.
    pub fn overview(df: &DataFrame) -> DatasetOverview {
        DatasetOverview {
            rows: df.height(),
            columns: df.width(),
            memory_kb: df.estimated_size() as f64 / 1024.0,
        }
    }

    pub fn column_types(df: &DataFrame) -> Vec<ColumnType> {
        df.get_columns()
            .iter()
            .map(|col| ColumnType {
                name: col.name().to_string(),
                dtype: col.dtype().clone(),
            })
            .collect()
    }

    /// Null counts, keeping only the columns that have any.
    pub fn missing_values(df: &DataFrame) -> MissingValues {
        let per_column: Vec<(String, usize)> = df
            .get_columns()
            .iter()
            .map(|col| (col.name().to_string(), col.null_count()))
            .filter(|(_, nulls)| *nulls > 0)
            .collect();
        let total = per_column.iter().map(|(_, nulls)| nulls).sum();

        MissingValues { per_column, total }
    }

    /// Outcome class counts, or `None` when there is no Outcome column.
    pub fn class_distribution(df: &DataFrame) -> Result<Option<ClassDistribution>> {
        let Ok(outcome) = df.column(OUTCOME_COLUMN) else {
            return Ok(None);
        };

        let values = numeric_values(outcome)?;
        Ok(Some(ClassDistribution {
            total: df.height(),
            healthy: values.iter().filter(|v| **v == 0.0).count(),
            diabetes: values.iter().filter(|v| **v == 1.0).count(),
        }))
    }
}
