//! Dataset loading.
//!
//! Reads the CSV into a [`RecordTable`], discarding the header line and
//! assigning the fixed column names.

use crate::error::{AnalyzerError, Result, ResultExt};
use crate::types::{COLUMN_NAMES, RecordTable};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Loads the diabetes dataset from disk.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a dataset file.
    ///
    /// The first line is always consumed as a header and its text is ignored;
    /// the columns are named from [`COLUMN_NAMES`] by position.
    ///
    /// # Errors
    ///
    /// - [`AnalyzerError::NotFound`] if `path` is not an existing file
    /// - [`AnalyzerError::ColumnCountMismatch`] if the data rows do not have 9 columns
    /// - [`AnalyzerError::Polars`] (with context) if parsing fails
    pub fn load(path: impl AsRef<Path>) -> Result<RecordTable> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AnalyzerError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let mut df = Self::read_csv(path)
            .context(format!("Failed to parse {}", path.display()))?;
        debug!("Parsed {} with shape {:?}", path.display(), df.shape());

        if df.width() != COLUMN_NAMES.len() {
            return Err(AnalyzerError::ColumnCountMismatch {
                path: path.to_path_buf(),
                expected: COLUMN_NAMES.len(),
                found: df.width(),
            });
        }

        df.set_column_names(COLUMN_NAMES)?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        info!("Successfully loaded: {}", file_name);

        Ok(RecordTable::new(df, path.to_path_buf()))
    }

    /// The header line is skipped as a raw row, so its field count never
    /// shapes the schema. Columns come back as `column_1..column_n`.
    fn read_csv(path: &Path) -> PolarsResult<DataFrame> {
        CsvReadOptions::default()
            .with_has_header(false)
            .with_skip_rows(1)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()
    }
}
