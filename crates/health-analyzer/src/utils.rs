//! Shared helpers for dtype checks, value extraction and number formatting.

use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    is_integer_dtype(dtype) || matches!(dtype, DataType::Float32 | DataType::Float64)
}

/// Check if a DataType is an integer type.
#[inline]
pub fn is_integer_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

// =============================================================================
// Value Extraction
// =============================================================================

/// Collect the non-null values of a column as `f64`.
///
/// Values that cannot be represented as a number are treated as null.
pub fn numeric_values(column: &Column) -> PolarsResult<Vec<f64>> {
    let float_series = column.as_materialized_series().cast(&DataType::Float64)?;
    Ok(float_series.f64()?.into_iter().flatten().collect())
}

/// Percentage of `count` in `total`, or 0.0 for an empty total.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Format a value the way its column stores it: integers without a fraction,
/// floats in their shortest round-trip form (`0.0`, `33.6`).
pub fn format_raw(value: f64, dtype: &DataType) -> String {
    if is_integer_dtype(dtype) {
        format!("{}", value as i64)
    } else {
        format!("{:?}", value)
    }
}
