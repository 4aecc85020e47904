//! Upload validation.

use std::path::Path;

use anemia_model::Dataset;

use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

/// Returns the required keywords that no first-row column name contains.
///
/// Matching is a case-insensitive substring test, so `status` is satisfied by
/// `Anemia_Status`.
pub fn missing_required_columns(dataset: &Dataset, required: &[String]) -> Vec<String> {
    let columns: Vec<String> = dataset
        .columns()
        .iter()
        .map(|name| name.to_lowercase())
        .collect();
    required
        .iter()
        .filter(|keyword| {
            let keyword = keyword.to_lowercase();
            !columns.iter().any(|column| column.contains(&keyword))
        })
        .cloned()
        .collect()
}

/// Rejects empty datasets and datasets lacking a required column.
pub fn validate_dataset(dataset: &Dataset, path: &Path, options: &IngestOptions) -> Result<()> {
    if dataset.is_empty() {
        return Err(IngestError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }
    let missing = missing_required_columns(dataset, &options.required_columns);
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { columns: missing });
    }
    Ok(())
}
