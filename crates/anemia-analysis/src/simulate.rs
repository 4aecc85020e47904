//! Stand-in for conjunctiva image analysis.
//!
//! No pixels are inspected. A reading is drawn from a clinical-looking range so
//! the rest of the flow (classification, dataset matching, reporting) can be
//! exercised end to end.

use std::ops::Range;

use anemia_model::ClassificationResult;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::classify::{round1, round2, severity_for_hemoglobin};

/// Range of simulated hemoglobin readings (g/dL).
pub const SIMULATED_HEMOGLOBIN: Range<f64> = 8.0..15.0;
/// Range of simulated confidence scores.
pub const SIMULATED_CONFIDENCE: Range<f64> = 0.75..0.95;

/// A fabricated image-analysis reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatedReading {
    /// Hemoglobin in g/dL, one decimal place.
    pub hemoglobin: f64,
    /// Confidence, two decimal places.
    pub confidence: f64,
}

impl SimulatedReading {
    /// Classifies the reading by threshold, keeping the simulated confidence.
    pub fn into_result(self) -> ClassificationResult {
        ClassificationResult::new(
            severity_for_hemoglobin(self.hemoglobin),
            self.hemoglobin,
            self.confidence,
        )
    }
}

/// Draws a reading from `rng`.
///
/// Pass a seeded generator for reproducible output.
pub fn simulate_reading<R: Rng>(rng: &mut R) -> SimulatedReading {
    let hemoglobin = round1(rng.random_range(SIMULATED_HEMOGLOBIN));
    let confidence = round2(rng.random_range(SIMULATED_CONFIDENCE));
    tracing::debug!(hemoglobin, confidence, "simulated reading");
    SimulatedReading {
        hemoglobin,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anemia_model::Severity;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seeded_readings_repeat() {
        let first = simulate_reading(&mut StdRng::seed_from_u64(7));
        let second = simulate_reading(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn readings_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let reading = simulate_reading(&mut rng);
            assert!((8.0..=15.0).contains(&reading.hemoglobin));
            assert!((0.75..=0.95).contains(&reading.confidence));
            assert_eq!(reading.hemoglobin, round1(reading.hemoglobin));
            assert_eq!(reading.confidence, round2(reading.confidence));
        }
    }

    #[test]
    fn into_result_uses_thresholds() {
        let reading = SimulatedReading {
            hemoglobin: 9.2,
            confidence: 0.91,
        };
        let result = reading.into_result();
        assert_eq!(result.status, Severity::Moderate);
        assert_eq!(result.confidence, 0.91);
        assert!(result.patient_info.is_none());
    }

    #[test]
    fn reading_json_shape() {
        let reading = SimulatedReading {
            hemoglobin: 12.4,
            confidence: 0.83,
        };
        let json = serde_json::to_value(reading).expect("serialize reading");
        assert_eq!(json["hemoglobin"], 12.4);
        assert_eq!(json["confidence"], 0.83);
        let back: SimulatedReading = serde_json::from_value(json).expect("deserialize reading");
        assert_eq!(back, reading);
    }
}
