//! Dataset analysis for anemia screening.
//!
//! Every function here is pure and synchronous. Absence of a result (`None`)
//! is the only failure mode: an empty dataset, no recognizable hemoglobin
//! column, or no parseable values.
//!
//! # Confidence models
//!
//! Two models coexist on purpose and need not agree for the same value:
//!
//! - [`classify_by_value`]: base 0.85, reduced near the 8/10/12 g/dL cut-points
//! - [`find_closest_match`]: [`compute_match_confidence`] of the match distance
//!
//! # Example
//!
//! ```
//! use anemia_analysis::{find_closest_match, summarize_dataset};
//! use anemia_model::{Dataset, Row, Severity};
//!
//! let dataset = Dataset::from(vec![
//!     Row::new().with("HGB", 11.0),
//!     Row::new().with("HGB", 9.0),
//!     Row::new().with("HGB", 12.5),
//! ]);
//!
//! let matched = find_closest_match(&dataset, 10.0).unwrap();
//! assert_eq!(matched.hemoglobin, 11.0);
//! assert_eq!(matched.status, Severity::Mild);
//!
//! let stats = summarize_dataset(&dataset).unwrap();
//! assert_eq!(stats.count, 3);
//! ```

mod classify;
mod columns;
mod matching;
mod simulate;
mod stats;

// === Classification ===
pub use classify::{
    MILD_THRESHOLD, MODERATE_THRESHOLD, NORMAL_THRESHOLD, THRESHOLDS, classify_by_value, round1,
    round2, severity_for_hemoglobin,
};

// === Column Discovery ===
pub use columns::{ColumnConcept, locate_column, locate_hemoglobin_column};

// === Dataset Matching ===
pub use matching::{
    AGE_ALIASES, GENDER_ALIASES, PREDICTED_STATUS_ALIASES, REMARK_ALIASES, SEVERITY_ALIASES,
    compute_match_confidence, extract_patient_info, find_closest_match, normalize_severity_label,
};

// === Statistics ===
pub use stats::summarize_dataset;

// === Simulated Reading ===
pub use simulate::{SIMULATED_CONFIDENCE, SIMULATED_HEMOGLOBIN, SimulatedReading, simulate_reading};
