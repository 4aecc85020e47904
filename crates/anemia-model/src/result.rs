//! Classification and statistics results.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;
use crate::value::CellValue;

/// Patient metadata copied from a matched dataset row.
///
/// Each field holds the first alias column that carried a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub age: Option<CellValue>,
    pub gender: Option<CellValue>,
    /// Explicit severity label from the source row (e.g. "Non-Anemic").
    pub severity: Option<CellValue>,
    pub remark: Option<CellValue>,
    /// Pre-labeled status column, reported verbatim.
    pub predicted_status: Option<CellValue>,
}

impl PatientInfo {
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.gender.is_none()
            && self.severity.is_none()
            && self.remark.is_none()
            && self.predicted_status.is_none()
    }
}

/// Outcome of a hemoglobin classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub status: Severity,
    /// Hemoglobin in g/dL.
    pub hemoglobin: f64,
    /// Confidence in [0, 1], rounded to two decimals.
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_info: Option<PatientInfo>,
}

impl ClassificationResult {
    pub fn new(status: Severity, hemoglobin: f64, confidence: f64) -> Self {
        Self {
            status,
            hemoglobin,
            confidence,
            patient_info: None,
        }
    }

    #[must_use]
    pub fn with_patient_info(mut self, info: PatientInfo) -> Self {
        self.patient_info = Some(info);
        self
    }

    /// Confidence as a whole percentage, for display.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

/// Summary statistics over the hemoglobin column of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    /// Column the values were read from.
    pub column: String,
    /// Number of parseable values.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}
