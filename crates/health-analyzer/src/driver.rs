//! Run orchestration: locate the dataset, then summarize and check it.

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result, ResultExt};
use crate::loader::DatasetLoader;
use crate::profiler::SummaryReporter;
use crate::quality::QualityChecker;
use crate::reporting::ConsoleReport;
use crate::types::{DatasetSummary, QualityFindings, RecordTable};
use tracing::debug;

/// Load the first candidate path that exists.
///
/// A missing candidate moves on to the next one; any other load failure is
/// returned immediately.
///
/// # Errors
///
/// [`AnalyzerError::DatasetNotFound`] listing every candidate, as configured,
/// when none of them exists.
pub fn locate_dataset(config: &AnalyzerConfig) -> Result<RecordTable> {
    for candidate in &config.candidate_paths {
        match DatasetLoader::load(config.resolve(candidate)) {
            Ok(table) => return Ok(table),
            Err(AnalyzerError::NotFound { path }) => {
                debug!("No dataset at {}, trying next candidate", path.display());
            }
            Err(e) => return Err(e),
        }
    }

    Err(AnalyzerError::DatasetNotFound {
        attempted: config.candidate_paths.clone(),
    })
}

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub table: RecordTable,
    pub summary: DatasetSummary,
    pub findings: QualityFindings,
}

impl Analysis {
    /// Summarize and check an already loaded table.
    pub fn of(table: RecordTable, head_rows: usize) -> Result<Self> {
        let source = table.source().display().to_string();
        let summary = SummaryReporter::summarize(table.frame(), head_rows)
            .context(format!("Failed to summarize {source}"))?;
        let findings = QualityChecker::check(table.frame())
            .context(format!("Failed to check quality of {source}"))?;
        Ok(Self {
            table,
            summary,
            findings,
        })
    }

    /// Full console text: summary sections, quality check, completion banner.
    pub fn render(&self) -> Result<String> {
        Ok([
            ConsoleReport::render_summary(&self.summary)?,
            ConsoleReport::render_quality(&self.findings),
            ConsoleReport::render_completion(),
        ]
        .join("\n"))
    }
}

/// Locate, load and analyze the dataset.
///
/// Nothing is rendered until loading and every computation has succeeded.
pub fn run(config: &AnalyzerConfig) -> Result<Analysis> {
    let table = locate_dataset(config)?;
    Analysis::of(table, config.head_rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
    }

    #[test]
    fn test_locate_uses_first_existing_candidate() {
        let config = AnalyzerConfig::builder()
            .base_dir(fixtures_dir())
            .candidate_paths(["missing.csv", "pima_sample.csv", "renamed_header.csv"])
            .build()
            .unwrap();
        let table = locate_dataset(&config).unwrap();

        assert_eq!(table.source(), fixtures_dir().join("pima_sample.csv"));
    }

    #[test]
    fn test_locate_reports_all_candidates() {
        let config = AnalyzerConfig::builder()
            .base_dir(fixtures_dir())
            .build()
            .unwrap();
        let err = locate_dataset(&config).unwrap_err();

        match err {
            AnalyzerError::DatasetNotFound { attempted } => assert_eq!(
                attempted,
                vec![
                    "../data/diabetes.csv",
                    "data/diabetes.csv",
                    "../../data/diabetes.csv"
                ]
            ),
            other => panic!("expected DatasetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_locate_stops_on_malformed_file() {
        let config = AnalyzerConfig::builder()
            .base_dir(fixtures_dir())
            .candidate_paths(["too_few_columns.csv", "pima_sample.csv"])
            .build()
            .unwrap();
        let err = locate_dataset(&config).unwrap_err();

        assert_eq!(err.error_code(), "COLUMN_COUNT_MISMATCH");
    }
}
