use crate::error::Result;
use crate::types::{
    QualityFindings, RANGE_COLUMNS, ValueRange, ZERO_INVALID_COLUMNS, ZeroValueFinding,
};
use crate::utils::{numeric_values, percentage};
use polars::prelude::*;
use tracing::debug;

pub struct QualityChecker;

impl QualityChecker {
    /// Run both checks against the schema's measurement columns.
    pub fn check(df: &DataFrame) -> Result<QualityFindings> {
        Ok(QualityFindings {
            total_rows: df.height(),
            zero_values: Self::zero_values(df, &ZERO_INVALID_COLUMNS)?,
            ranges: Self::value_ranges(df, &RANGE_COLUMNS)?,
        })
    }

    /// Columns among `columns` holding exact zeros, in the order given.
    ///
    /// Absent columns and columns without zeros are left out.
    pub fn zero_values(df: &DataFrame, columns: &[&str]) -> Result<Vec<ZeroValueFinding>> {
        let mut findings = Vec::new();

        for &name in columns {
            let Ok(column) = df.column(name) else {
                debug!("Skipping zero check for absent column '{}'", name);
                continue;
            };

            let count = numeric_values(column)?
                .iter()
                .filter(|v| **v == 0.0)
                .count();
            if count > 0 {
                findings.push(ZeroValueFinding {
                    column: name.to_string(),
                    count,
                    percentage: percentage(count, df.height()),
                });
            }
        }

        Ok(findings)
    }

    /// Observed min and max of each present column among `columns`.
    pub fn value_ranges(df: &DataFrame, columns: &[&str]) -> Result<Vec<ValueRange>> {
        let mut ranges = Vec::new();

        for &name in columns {
            let Ok(column) = df.column(name) else {
                debug!("Skipping range check for absent column '{}'", name);
                continue;
            };

            let values = numeric_values(column)?;
            ranges.push(ValueRange {
                column: name.to_string(),
                dtype: column.dtype().clone(),
                min: values.iter().copied().reduce(f64::min),
                max: values.iter().copied().reduce(f64::max),
            });
        }

        Ok(ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values_count_and_percentage() {
        let df = df![
            "Glucose" => [0i64, 85, 0, 89, 137, 0],
            "BMI" => [33.6f64, 0.0, 23.3, 28.1, 43.1, 25.6],
        ]
        .unwrap();
        let findings = QualityChecker::zero_values(&df, &ZERO_INVALID_COLUMNS).unwrap();

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].column, "Glucose");
        assert_eq!(findings[0].count, 3);
        assert_eq!(findings[0].percentage, 50.0);
        assert_eq!(findings[1].column, "BMI");
        assert_eq!(findings[1].count, 1);
    }

    #[test]
    fn test_zero_values_omits_clean_columns() {
        let df = df![
            "Glucose" => [148i64, 85, 183],
            "Insulin" => [0i64, 94, 168],
        ]
        .unwrap();
        let findings = QualityChecker::zero_values(&df, &ZERO_INVALID_COLUMNS).unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].column, "Insulin");
    }

    #[test]
    fn test_zero_values_ignores_nulls() {
        let df = df!["Glucose" => [Some(0i64), None, Some(85)]].unwrap();
        let findings = QualityChecker::zero_values(&df, &["Glucose"]).unwrap();

        assert_eq!(findings[0].count, 1);
        assert!((findings[0].percentage - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_value_ranges() {
        let df = df![
            "Age" => [50i64, 31, 21, 81],
            "BMI" => [33.6f64, 0.0, 67.1, 28.1],
        ]
        .unwrap();
        let ranges = QualityChecker::value_ranges(&df, &RANGE_COLUMNS).unwrap();

        // Glucose is absent and skipped
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].column, "Age");
        assert_eq!(ranges[0].min, Some(21.0));
        assert_eq!(ranges[0].max, Some(81.0));
        assert_eq!(ranges[0].dtype, DataType::Int64);
        assert_eq!(ranges[1].column, "BMI");
        assert_eq!(ranges[1].min, Some(0.0));
        assert_eq!(ranges[1].max, Some(67.1));
    }

    #[test]
    fn test_value_ranges_all_null_column() {
        let df = df!["Age" => [None::<i64>, None]].unwrap();
        let ranges = QualityChecker::value_ranges(&df, &["Age"]).unwrap();

        assert_eq!(ranges[0].min, None);
        assert_eq!(ranges[0].max, None);
    }

    #[test]
    fn test_check_on_empty_schema() {
        let df = df!["Pregnancies" => [6i64, 1]].unwrap();
        let findings = QualityChecker::check(&df).unwrap();

        assert_eq!(findings.total_rows, 2);
        assert!(findings.zero_values.is_empty());
        assert!(findings.ranges.is_empty());
    }
}
