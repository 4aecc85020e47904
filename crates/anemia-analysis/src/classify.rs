//! Threshold classification of a single hemoglobin reading.

use anemia_model::{ClassificationResult, Severity};

/// Lower bound of the normal band (g/dL).
pub const NORMAL_THRESHOLD: f64 = 12.0;
/// Lower bound of the mild band (g/dL).
pub const MILD_THRESHOLD: f64 = 10.0;
/// Lower bound of the moderate band (g/dL).
pub const MODERATE_THRESHOLD: f64 = 8.0;

/// Cut-points that reduce confidence when a reading sits close to them.
pub const THRESHOLDS: [f64; 3] = [MODERATE_THRESHOLD, MILD_THRESHOLD, NORMAL_THRESHOLD];

const BASE_CONFIDENCE: f64 = 0.85;
const PROXIMITY_WINDOW: f64 = 0.5;
const PROXIMITY_PENALTY: f64 = 0.1;

/// Maps a hemoglobin value onto its severity band.
///
/// Boundary values belong to the upper band. A NaN reading falls through
/// every comparison and lands in [`Severity::Severe`].
pub fn severity_for_hemoglobin(hemoglobin: f64) -> Severity {
    if hemoglobin >= NORMAL_THRESHOLD {
        Severity::Normal
    } else if hemoglobin >= MILD_THRESHOLD {
        Severity::Mild
    } else if hemoglobin >= MODERATE_THRESHOLD {
        Severity::Moderate
    } else {
        Severity::Severe
    }
}

/// Classifies a reading with the threshold-proximity confidence model.
///
/// Confidence starts at 0.85 and every threshold closer than 0.5 g/dL takes
/// `(0.5 - distance) * 0.1` off it.
///
/// # Examples
///
/// ```
/// use anemia_analysis::classify_by_value;
/// use anemia_model::Severity;
///
/// let result = classify_by_value(10.0);
/// assert_eq!(result.status, Severity::Mild);
/// assert_eq!(result.confidence, 0.8);
/// ```
pub fn classify_by_value(hemoglobin: f64) -> ClassificationResult {
    let status = severity_for_hemoglobin(hemoglobin);
    let mut confidence = BASE_CONFIDENCE;
    for threshold in THRESHOLDS {
        let distance = (hemoglobin - threshold).abs();
        if distance < PROXIMITY_WINDOW {
            confidence -= (PROXIMITY_WINDOW - distance) * PROXIMITY_PENALTY;
        }
    }
    let confidence = round2(confidence.clamp(0.0, 1.0));
    tracing::debug!(hemoglobin, %status, confidence, "classified reading");
    ClassificationResult::new(status, hemoglobin, confidence)
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
