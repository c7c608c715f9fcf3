//! Descriptive statistics for numeric columns.

use crate::types::ColumnStatistics;
use crate::utils::numeric_values;
use polars::prelude::*;

/// Compute count, mean, std, min, quartiles and max for a column.
pub(crate) fn describe_column(column: &Column) -> PolarsResult<ColumnStatistics> {
    let mut values = numeric_values(column)?;
    values.sort_by(f64::total_cmp);

    Ok(ColumnStatistics {
        name: column.name().to_string(),
        count: values.len(),
        mean: calculate_mean(&values),
        std: calculate_std(&values),
        min: values.first().copied(),
        q25: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values.last().copied(),
    })
}

/// Arithmetic mean, or `None` when there are no values.
pub(crate) fn calculate_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
pub(crate) fn calculate_std(values: &[f64]) -> Option<f64> {
    let n = values.len() as f64;
    if n <= 1.0 {
        return None;
    }

    let mean = calculate_mean(values)?;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Some(variance.sqrt())
}

/// Quantile of already sorted values, interpolating linearly between the two
/// closest ranks.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}
