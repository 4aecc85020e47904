//! Heuristic column discovery.
//!
//! Uploaded spreadsheets name the same field in many ways ("Hemoglobin",
//! "HGB", "HB_LEVEL", "Patient_HGB_Level"). Discovery looks at the first row
//! only and assumes it is representative of the whole dataset.

use std::fmt;

use anemia_model::Dataset;
use serde::{Deserialize, Serialize};

/// A semantic column the analysis knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnConcept {
    Hemoglobin,
}

impl ColumnConcept {
    /// Lowercase substrings that identify this concept in a column name.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            ColumnConcept::Hemoglobin => &["hemoglobin", "hgb", "hb", "hb_level"],
        }
    }

    /// True when `column` contains any synonym, ignoring case.
    pub fn matches(&self, column: &str) -> bool {
        let lowered = column.to_lowercase();
        self.synonyms()
            .iter()
            .any(|synonym| lowered.contains(synonym))
    }
}

impl fmt::Display for ColumnConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnConcept::Hemoglobin => write!(f, "hemoglobin"),
        }
    }
}

/// Finds the first column of the first row that names `concept`.
///
/// Returns `None` for an empty dataset or when no column matches.
pub fn locate_column(dataset: &Dataset, concept: ColumnConcept) -> Option<String> {
    let first = dataset.first_row()?;
    let found = first.columns().find(|name| concept.matches(name));
    match found {
        Some(name) => tracing::debug!(%concept, column = name, "located column"),
        None => tracing::debug!(%concept, "no matching column"),
    }
    found.map(str::to_string)
}

/// Shorthand for [`locate_column`] with [`ColumnConcept::Hemoglobin`].
pub fn locate_hemoglobin_column(dataset: &Dataset) -> Option<String> {
    locate_column(dataset, ColumnConcept::Hemoglobin)
}
