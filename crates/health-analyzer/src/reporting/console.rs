use crate::types::{
    ClassDistribution, ColumnStatistics, DatasetSummary, MissingValues, QualityFindings,
    ValueRange,
};
use crate::utils::format_raw;
use polars::prelude::*;

/// Width of the `=` rules framing each section title.
pub const SEPARATOR_WIDTH: usize = 60;

/// Width of the leading column-name field in per-column tables.
const NAME_WIDTH: usize = 26;

/// Width of each numeric field in the statistics table.
const STAT_WIDTH: usize = 13;

/// Renders computed summaries and findings as plain console text.
///
/// Every `render_*` function returns the section text without a trailing
/// newline, ready for `println!`.
pub struct ConsoleReport;

impl ConsoleReport {
    /// Blank line, rule, title, rule.
    pub fn section_header(title: &str) -> String {
        let rule = "=".repeat(SEPARATOR_WIDTH);
        format!("\n{rule}\n{title}\n{rule}")
    }

    /// All six summary sections in their fixed order.
    pub fn render_summary(summary: &DatasetSummary) -> PolarsResult<String> {
        let mut lines = Vec::new();

        lines.push(Self::section_header("Dataset Overview"));
        lines.push(format!("Number of rows: {}", summary.overview.rows));
        lines.push(format!("Number of columns: {}", summary.overview.columns));
        lines.push(format!("Memory usage: {:.2} KB", summary.overview.memory_kb));

        lines.push(Self::section_header("Data Types"));
        for column in &summary.column_types {
            lines.push(format!("{:<NAME_WIDTH$}{}", column.name, column.dtype));
        }

        lines.push(Self::section_header(&format!(
            "First {} Rows",
            summary.head_rows
        )));
        lines.push(Self::render_head(&summary.head)?);

        lines.push(Self::section_header("Descriptive Statistics"));
        lines.push(Self::render_statistics(&summary.statistics));

        lines.push(Self::section_header("Missing Values"));
        lines.push(Self::render_missing(&summary.missing));

        if let Some(distribution) = &summary.class_distribution {
            lines.push(Self::section_header("Class Distribution"));
            lines.push(Self::render_class_distribution(distribution));
        }

        Ok(lines.join("\n"))
    }

    /// Rows printed as stored, right-aligned under their column names, with
    /// a leading row index.
    pub fn render_head(head: &DataFrame) -> PolarsResult<String> {
        let columns = head.get_columns();
        let mut cells: Vec<Vec<String>> = Vec::with_capacity(columns.len());
        for column in columns {
            let mut cell_column = vec![column.name().to_string()];
            for row in 0..head.height() {
                cell_column.push(format!("{}", column.get(row)?));
            }
            cells.push(cell_column);
        }

        let index_width = head.height().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = cells
            .iter()
            .map(|cell_column| cell_column.iter().map(|c| c.len()).max().unwrap_or(0))
            .collect();

        let mut lines = Vec::with_capacity(head.height() + 1);
        for row in 0..=head.height() {
            let index = if row == 0 {
                String::new()
            } else {
                (row - 1).to_string()
            };
            let mut line = format!("{index:<index_width$}");
            for (cell_column, &width) in cells.iter().zip(&widths) {
                line.push_str(&format!("  {:>width$}", cell_column[row]));
            }
            lines.push(line);
        }

        Ok(lines.join("\n"))
    }

    pub fn render_statistics(statistics: &[ColumnStatistics]) -> String {
        let mut lines = vec![format!(
            "{:<NAME_WIDTH$}{:>STAT_WIDTH$}{:>STAT_WIDTH$}{:>STAT_WIDTH$}{:>STAT_WIDTH$}{:>STAT_WIDTH$}{:>STAT_WIDTH$}{:>STAT_WIDTH$}{:>STAT_WIDTH$}",
            "", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
        )];

        for stats in statistics {
            let mut line = format!("{:<NAME_WIDTH$}{:>STAT_WIDTH$}", stats.name, stats.count);
            for value in [
                stats.mean,
                stats.std,
                stats.min,
                stats.q25,
                stats.median,
                stats.q75,
                stats.max,
            ] {
                line.push_str(&format!("{:>STAT_WIDTH$}", format_statistic(value)));
            }
            lines.push(line);
        }

        lines.join("\n")
    }

    pub fn render_missing(missing: &MissingValues) -> String {
        if missing.is_empty() {
            return "No missing values found!".to_string();
        }

        missing
            .per_column
            .iter()
            .map(|(name, count)| format!("{name:<NAME_WIDTH$}{count}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_class_distribution(distribution: &ClassDistribution) -> String {
        format!(
            "Healthy (0): {} ({:.1}%)\nDiabetes (1): {} ({:.1}%)",
            distribution.healthy,
            distribution.healthy_percentage(),
            distribution.diabetes,
            distribution.diabetes_percentage()
        )
    }

    /// The data quality section: zero-value diagnostics then value ranges.
    pub fn render_quality(findings: &QualityFindings) -> String {
        let mut lines = vec![Self::section_header("Data Quality Check")];

        lines.push("\nZero values (potential missing data):".to_string());
        for finding in &findings.zero_values {
            lines.push(format!(
                "  {}: {} zeros ({:.1}%)",
                finding.column, finding.count, finding.percentage
            ));
        }

        lines.push("\nValue ranges:".to_string());
        for range in &findings.ranges {
            lines.push(Self::render_range(range));
        }

        lines.join("\n")
    }

    /// One range line. BMI is shown to one decimal, Age carries its unit.
    pub fn render_range(range: &ValueRange) -> String {
        let (Some(min), Some(max)) = (range.min, range.max) else {
            return format!("  {}: no values", range.column);
        };

        match range.column.as_str() {
            "BMI" => format!("  BMI: {min:.1} to {max:.1}"),
            "Age" => format!(
                "  Age: {} to {} years",
                format_raw(min, &range.dtype),
                format_raw(max, &range.dtype)
            ),
            other => format!(
                "  {}: {} to {}",
                other,
                format_raw(min, &range.dtype),
                format_raw(max, &range.dtype)
            ),
        }
    }

    /// Closing banner printed after a successful run.
    pub fn render_completion() -> String {
        Self::section_header("Analysis completed successfully!")
    }
}

fn format_statistic(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.6}"),
        None => "NaN".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ZeroValueFinding;

    #[test]
    fn test_section_header() {
        let header = ConsoleReport::section_header("Data Types");
        let lines: Vec<&str> = header.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1].len(), 60);
        assert!(lines[1].chars().all(|c| c == '='));
        assert_eq!(lines[2], "Data Types");
        assert_eq!(lines[3], lines[1]);
    }

    #[test]
    fn test_render_class_distribution() {
        let text = ConsoleReport::render_class_distribution(&ClassDistribution {
            total: 3,
            healthy: 2,
            diabetes: 1,
        });
        assert_eq!(text, "Healthy (0): 2 (66.7%)\nDiabetes (1): 1 (33.3%)");
    }

    #[test]
    fn test_render_missing_none() {
        let text = ConsoleReport::render_missing(&MissingValues::default());
        assert_eq!(text, "No missing values found!");
    }

    #[test]
    fn test_render_missing_lists_columns() {
        let text = ConsoleReport::render_missing(&MissingValues {
            per_column: vec![("Insulin".to_string(), 4)],
            total: 4,
        });
        assert!(text.starts_with("Insulin"));
        assert!(text.ends_with('4'));
        assert!(!text.contains("No missing values"));
    }

    #[test]
    fn test_render_statistics_row() {
        let text = ConsoleReport::render_statistics(&[ColumnStatistics {
            name: "Glucose".to_string(),
            count: 4,
            mean: Some(2.5),
            std: None,
            min: Some(1.0),
            q25: Some(1.75),
            median: Some(2.5),
            q75: Some(3.25),
            max: Some(4.0),
        }]);
        let row = text.lines().nth(1).unwrap();

        assert!(row.starts_with("Glucose"));
        assert!(row.contains("2.500000"));
        assert!(row.contains("NaN"));
        assert!(row.ends_with("4.000000"));
    }

    #[test]
    fn test_head_title_uses_requested_rows() {
        let df = df!["Outcome" => [0i64, 1]].unwrap();
        let summary = crate::profiler::SummaryReporter::summarize(&df, 5).unwrap();
        let text = ConsoleReport::render_summary(&summary).unwrap();

        assert_eq!(summary.head.height(), 2);
        assert!(text.contains("\nFirst 5 Rows\n"));
        assert!(!text.contains("First 2 Rows"));
    }

    #[test]
    fn test_render_head_shape() {
        let df = df!["Glucose" => [148i64, 85], "Outcome" => [1i64, 0]].unwrap();
        let text = ConsoleReport::render_head(&df).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Glucose") && lines[0].contains("Outcome"));
        assert!(lines[1].starts_with('0') && lines[1].contains("148"));
        assert!(lines[2].starts_with('1') && lines[2].contains("85"));
    }

    #[test]
    fn test_render_quality() {
        let findings = QualityFindings {
            total_rows: 768,
            zero_values: vec![ZeroValueFinding {
                column: "Glucose".to_string(),
                count: 5,
                percentage: 5.0 / 768.0 * 100.0,
            }],
            ranges: vec![
                ValueRange {
                    column: "Age".to_string(),
                    dtype: DataType::Int64,
                    min: Some(21.0),
                    max: Some(81.0),
                },
                ValueRange {
                    column: "BMI".to_string(),
                    dtype: DataType::Float64,
                    min: Some(0.0),
                    max: Some(67.1),
                },
                ValueRange {
                    column: "Glucose".to_string(),
                    dtype: DataType::Int64,
                    min: Some(0.0),
                    max: Some(199.0),
                },
            ],
        };
        let text = ConsoleReport::render_quality(&findings);

        assert!(text.contains("  Glucose: 5 zeros (0.7%)"));
        assert!(text.contains("  Age: 21 to 81 years"));
        assert!(text.contains("  BMI: 0.0 to 67.1"));
        assert!(text.contains("  Glucose: 0 to 199"));
    }

    #[test]
    fn test_render_range_without_values() {
        let range = ValueRange {
            column: "Age".to_string(),
            dtype: DataType::Int64,
            min: None,
            max: None,
        };
        assert_eq!(ConsoleReport::render_range(&range), "  Age: no values");
    }
}
