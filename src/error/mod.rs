//! Error handling for the adoption metrics engine.
//!
//! The engine has exactly one hard failure: the dataset cannot be made
//! available. Everything after a successful load is total, so an empty
//! filter result is reported through empty aggregates rather than an error.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;

/// Specialized error type for the adoption metrics engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The dataset is missing, unreadable or does not match the expected schema
    #[error("data unavailable at {}: {issue}", .path.display())]
    DataUnavailable {
        /// Location the dataset was read from
        path: PathBuf,
        /// What went wrong
        #[source]
        issue: DataIssue,
    },
}

/// Detail on why a dataset could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum DataIssue {
    /// Nothing exists at the path
    #[error("file not found")]
    NotFound,

    /// The path exists but is a directory or special file
    #[error("path is not a file")]
    NotAFile,

    /// Reading the file failed
    #[error("failed to read file: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid CSV (ragged rows, invalid UTF-8, ...)
    #[error("malformed CSV: {0}")]
    Csv(#[from] ArrowError),

    /// One or more required columns are absent from the header
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A required cell is null or blank
    #[error("row {row}: missing value for '{column}'")]
    MissingValue {
        /// 1-based data row (header excluded)
        row: usize,
        /// Canonical column name
        column: &'static str,
    },

    /// A cell could not be parsed or violates its constraint
    #[error("row {row}: invalid value '{value}' for '{column}'")]
    InvalidValue {
        /// 1-based data row (header excluded)
        row: usize,
        /// Canonical column name
        column: &'static str,
        /// Raw cell content
        value: String,
    },

    /// The file parsed but contained no usable procedure records
    #[error("dataset contains no procedure records")]
    NoRecords,
}

impl EngineError {
    /// Build a `DataUnavailable` error for the given path
    pub fn data_unavailable(path: impl AsRef<Path>, issue: impl Into<DataIssue>) -> Self {
        Self::DataUnavailable {
            path: path.as_ref().to_path_buf(),
            issue: issue.into(),
        }
    }

    /// The underlying data issue
    #[must_use]
    pub fn issue(&self) -> &DataIssue {
        match self {
            Self::DataUnavailable { issue, .. } => issue,
        }
    }

    /// Message suitable for showing to a dashboard user before stopping
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::DataUnavailable {
                path,
                issue: DataIssue::NotFound,
            } => format!(
                "Error: Data file not found at {}. Please check the path.",
                path.display()
            ),
            Self::DataUnavailable { issue, .. } => {
                format!("An error occurred during data loading: {issue}")
            }
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
