//! Loader settings.

use serde::{Deserialize, Serialize};

/// Column keywords the uploader requires by default.
pub const DEFAULT_REQUIRED_COLUMNS: [&str; 2] = ["hemoglobin", "status"];

/// Rows Polars inspects when inferring CSV column types.
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 100;

/// Options controlling dataset loading and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Keywords that must each appear (case-insensitively) in some column name.
    pub required_columns: Vec<String>,
    /// Rows used for CSV schema inference (`None` scans the whole file).
    pub infer_schema_length: Option<usize>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            required_columns: DEFAULT_REQUIRED_COLUMNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            infer_schema_length: Some(DEFAULT_INFER_SCHEMA_LENGTH),
        }
    }
}

impl IngestOptions {
    /// Accepts any non-empty dataset regardless of column names.
    pub fn lenient() -> Self {
        Self {
            required_columns: Vec::new(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_required_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }
}
