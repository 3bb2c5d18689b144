//! Error types for loading election tables and reading rows back out.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures while loading or summarizing an election table.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// `line` is the 1-based line in the source file, header included.
    #[error("line {line} has no value for column `{column}`")]
    MissingValue { line: usize, column: &'static str },

    #[error("data file contains no rows")]
    Empty,

    #[error("column `{column}` has no values")]
    NoValues { column: &'static str },
}

/// A row position outside the bounds of the loaded table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("row index {index} out of range for table of {len} rows")]
pub struct IndexOutOfRangeError {
    pub index: usize,
    pub len: usize,
}

/// Failures in the reporting layer.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Index(#[from] IndexOutOfRangeError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
