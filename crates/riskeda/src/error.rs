//! Error types for the riskeda library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for riskeda operations.
#[derive(Debug, Error)]
pub enum EdaError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required columns absent from the header row.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A cell could not be converted to the expected type.
    #[error("Parse error at row {row}, column '{column}': {message}")]
    Parse {
        row: usize,
        column: String,
        message: String,
    },

    /// Empty file or no data rows.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Split parameters cannot produce two non-empty partitions.
    #[error("Invalid split: {0}")]
    InvalidSplit(String),

    /// Output file format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Drawing backend failure.
    #[error("Render error: {0}")]
    Render(String),

    /// PNG encoding failure.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// An expected output file is not on disk after rendering.
    #[error("Expected artifact was not written: {}", .0.display())]
    MissingArtifact(PathBuf),
}

impl EdaError {
    /// Returns true for an I/O error caused by a missing path component.
    pub fn is_missing_path(&self) -> bool {
        matches!(
            self,
            EdaError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Result type alias for riskeda operations.
pub type Result<T> = std::result::Result<T, EdaError>;
