//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an uploaded dataset or image.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// Extension is not a supported spreadsheet format.
    #[error("unsupported dataset format '{extension}' for {path} (expected csv, xlsx or xls)")]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// File is not a recognized image type.
    #[error("not an image file: {path}")]
    UnsupportedImage { path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook has no worksheets.
    #[error("workbook has no worksheets: {path}")]
    NoWorksheet { path: PathBuf },

    // === Validation Errors ===
    /// Dataset contains no data rows.
    #[error("dataset is empty: {path}")]
    EmptyDataset { path: PathBuf },

    /// Required columns not found in the first row.
    #[error("dataset missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl IngestError {
    /// Maps an I/O error on `path`, separating "not found" from other failures.
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/data.xlsx"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/data.xlsx");
    }

    #[test]
    fn test_missing_columns_display() {
        let err = IngestError::MissingColumns {
            columns: vec!["hemoglobin".to_string(), "status".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "dataset missing required columns: hemoglobin, status"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }

    #[test]
    fn test_io_not_found() {
        let err = IngestError::io(
            std::path::Path::new("missing.csv"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
