//! Configuration for a single analysis run.
//!
//! Values come from CLI flags; there is no config file. Use
//! [`AnalyzerConfig::builder()`] for a validated configuration.

use std::path::{Path, PathBuf};

/// Relative locations tried, in order, when no explicit input is given.
pub const DEFAULT_CANDIDATE_PATHS: [&str; 3] = [
    "../data/diabetes.csv",
    "data/diabetes.csv",
    "../../data/diabetes.csv",
];

/// Number of rows shown in the head section by default.
pub const DEFAULT_HEAD_ROWS: usize = 5;

/// Configuration for an analysis run.
///
/// # Example
///
/// ```rust,ignore
/// use health_analyzer::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .candidate_paths(["data/diabetes.csv"])
///     .head_rows(10)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Dataset paths tried in order. The first one that loads is used.
    /// Default: [`DEFAULT_CANDIDATE_PATHS`]
    pub candidate_paths: Vec<String>,

    /// Directory relative candidate paths are resolved against.
    /// Default: None (the process working directory)
    pub base_dir: Option<PathBuf>,

    /// Number of rows printed in the head section.
    /// Default: 5
    pub head_rows: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            candidate_paths: DEFAULT_CANDIDATE_PATHS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            base_dir: None,
            head_rows: DEFAULT_HEAD_ROWS,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.candidate_paths.is_empty() {
            return Err(ConfigValidationError::NoCandidatePaths);
        }

        if let Some(blank) = self.candidate_paths.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigValidationError::BlankCandidatePath(blank));
        }

        if self.head_rows == 0 {
            return Err(ConfigValidationError::InvalidHeadRows(self.head_rows));
        }

        Ok(())
    }

    /// Resolve a candidate path against the configured base directory.
    pub fn resolve(&self, candidate: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(candidate),
            None => Path::new(candidate).to_path_buf(),
        }
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("At least one candidate dataset path is required")]
    NoCandidatePaths,

    #[error("Candidate path at position {0} is blank")]
    BlankCandidatePath(usize),

    #[error("Invalid head rows: {0} (must be at least 1)")]
    InvalidHeadRows(usize),
}

/// Builder for [`AnalyzerConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    candidate_paths: Option<Vec<String>>,
    base_dir: Option<PathBuf>,
    head_rows: Option<usize>,
}

impl AnalyzerConfigBuilder {
    /// Replace the candidate path list.
    pub fn candidate_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidate_paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Use a single explicit dataset path instead of the candidate list.
    pub fn input(self, path: impl Into<String>) -> Self {
        self.candidate_paths([path.into()])
    }

    /// Set the directory candidate paths are resolved against.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Set the number of rows in the head section.
    pub fn head_rows(mut self, rows: usize) -> Self {
        self.head_rows = Some(rows);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<AnalyzerConfig, ConfigValidationError> {
        let defaults = AnalyzerConfig::default();
        let config = AnalyzerConfig {
            candidate_paths: self.candidate_paths.unwrap_or(defaults.candidate_paths),
            base_dir: self.base_dir.or(defaults.base_dir),
            head_rows: self.head_rows.unwrap_or(defaults.head_rows),
        };

        config.validate()?;
        Ok(config)
    }
}
