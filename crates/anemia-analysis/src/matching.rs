//! Nearest-row lookup against an uploaded dataset.
//!
//! The closest row by hemoglobin distance supplies the reported value, any
//! explicit severity label, and patient metadata. Its confidence comes from
//! [`compute_match_confidence`], a distance model independent of the
//! threshold-proximity model in [`crate::classify`].

use anemia_model::{CellValue, ClassificationResult, Dataset, PatientInfo, Row, Severity};

use crate::classify::{round2, severity_for_hemoglobin};
use crate::columns::locate_hemoglobin_column;

/// Alias columns for patient age.
pub const AGE_ALIASES: &[&str] = &["Age (Months)", "AGE"];
/// Alias columns for patient gender.
pub const GENDER_ALIASES: &[&str] = &["GENDER", "Gender"];
/// Alias columns for an explicit severity label.
pub const SEVERITY_ALIASES: &[&str] = &["Severity"];
/// Alias columns for free-text remarks.
pub const REMARK_ALIASES: &[&str] = &["REMARK"];
/// Alias columns for a pre-labeled anemia status.
pub const PREDICTED_STATUS_ALIASES: &[&str] = &["Predicted_Anemia_Status"];

const MAX_MATCH_CONFIDENCE: f64 = 0.98;
const MIN_MATCH_CONFIDENCE: f64 = 0.75;
const DISTANCE_PENALTY: f64 = 0.1;

/// Confidence for a dataset match `distance` g/dL away from the target.
///
/// `1 - distance * 0.1`, clamped to [0.75, 0.98], rounded to two decimals.
/// A NaN distance scores the floor.
///
/// # Examples
///
/// ```
/// use anemia_analysis::compute_match_confidence;
///
/// assert_eq!(compute_match_confidence(0.0), 0.98);
/// assert_eq!(compute_match_confidence(2.0), 0.8);
/// assert_eq!(compute_match_confidence(100.0), 0.75);
/// ```
pub fn compute_match_confidence(distance: f64) -> f64 {
    if distance.is_nan() {
        return MIN_MATCH_CONFIDENCE;
    }
    let confidence = 1.0 - distance * DISTANCE_PENALTY;
    round2(confidence.clamp(MIN_MATCH_CONFIDENCE, MAX_MATCH_CONFIDENCE))
}

/// Finds the row whose hemoglobin is closest to `target`.
///
/// Returns `None` for a non-finite `target`, and when the dataset is empty,
/// has no hemoglobin column, or has no row with a parseable hemoglobin value.
/// Rows that do not parse are never candidates. Ties keep the earliest row.
pub fn find_closest_match(dataset: &Dataset, target: f64) -> Option<ClassificationResult> {
    if !target.is_finite() {
        tracing::debug!(target, "non-finite target");
        return None;
    }
    let column = locate_hemoglobin_column(dataset)?;

    let mut best: Option<(&Row, f64, f64)> = None;
    let mut skipped = 0usize;
    for row in dataset.rows() {
        let Some(value) = row.get(&column).and_then(CellValue::as_f64) else {
            skipped += 1;
            continue;
        };
        let distance = (value - target).abs();
        let closer = match best {
            Some((_, _, best_distance)) => distance < best_distance,
            None => true,
        };
        if closer {
            best = Some((row, value, distance));
        }
    }
    if skipped > 0 {
        tracing::debug!(column = %column, skipped, "rows without a parseable hemoglobin value");
    }

    let Some((row, hemoglobin, distance)) = best else {
        tracing::debug!(column = %column, "no candidate rows");
        return None;
    };

    let info = extract_patient_info(row);
    let status = info
        .severity
        .as_ref()
        .and_then(severity_from_cell)
        .unwrap_or_else(|| severity_for_hemoglobin(hemoglobin));
    let confidence = compute_match_confidence(distance);
    tracing::debug!(target, hemoglobin, distance, %status, confidence, "closest match");

    Some(ClassificationResult::new(status, hemoglobin, confidence).with_patient_info(info))
}

/// Normalizes a free-text severity label.
///
/// Case-insensitive substring match, checked in order: "non" or "normal",
/// "mild", "moderate", "severe". Returns `None` for unrecognized labels.
///
/// # Examples
///
/// ```
/// use anemia_analysis::normalize_severity_label;
/// use anemia_model::Severity;
///
/// assert_eq!(normalize_severity_label("Non-Anemic"), Some(Severity::Normal));
/// assert_eq!(normalize_severity_label("MODERATE"), Some(Severity::Moderate));
/// assert_eq!(normalize_severity_label("Unknown"), None);
/// ```
pub fn normalize_severity_label(label: &str) -> Option<Severity> {
    let lowered = label.to_lowercase();
    if lowered.contains("non") || lowered.contains("normal") {
        Some(Severity::Normal)
    } else if lowered.contains("mild") {
        Some(Severity::Mild)
    } else if lowered.contains("moderate") {
        Some(Severity::Moderate)
    } else if lowered.contains("severe") {
        Some(Severity::Severe)
    } else {
        None
    }
}

fn severity_from_cell(cell: &CellValue) -> Option<Severity> {
    normalize_severity_label(&cell.to_string())
}

/// Reads patient metadata from a row by exact alias names.
pub fn extract_patient_info(row: &Row) -> PatientInfo {
    PatientInfo {
        age: first_present(row, AGE_ALIASES),
        gender: first_present(row, GENDER_ALIASES),
        severity: first_present(row, SEVERITY_ALIASES),
        remark: first_present(row, REMARK_ALIASES),
        predicted_status: first_present(row, PREDICTED_STATUS_ALIASES),
    }
}

fn first_present(row: &Row, aliases: &[&str]) -> Option<CellValue> {
    aliases
        .iter()
        .filter_map(|alias| row.get(alias))
        .find(|cell| cell.has_value())
        .cloned()
}
