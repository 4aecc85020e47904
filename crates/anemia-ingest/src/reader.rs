//! Format dispatch for uploaded datasets.

use std::path::Path;

use anemia_model::Dataset;

use crate::csv::read_csv_dataset;
use crate::error::{IngestError, Result};
use crate::excel::read_excel_dataset;
use crate::options::IngestOptions;
use crate::validate::validate_dataset;

/// Supported dataset file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Excel,
}

impl DatasetFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Ok(Self::Excel),
            _ => Err(IngestError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Loads and validates a dataset file.
///
/// The format is chosen by extension, then the result is checked against
/// `options` (non-empty, required columns present).
pub fn read_dataset(path: &Path, options: &IngestOptions) -> Result<Dataset> {
    let format = DatasetFormat::from_path(path)?;
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if !metadata.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let dataset = match format {
        DatasetFormat::Csv => read_csv_dataset(path, options.infer_schema_length)?,
        DatasetFormat::Excel => read_excel_dataset(path)?,
    };
    validate_dataset(&dataset, path, options)?;

    tracing::info!(
        path = %path.display(),
        format = ?format,
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "loaded dataset"
    );
    Ok(dataset)
}
