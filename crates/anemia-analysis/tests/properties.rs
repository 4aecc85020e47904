//! Property tests for the classification and confidence models.

use anemia_analysis::{
    THRESHOLDS, classify_by_value, compute_match_confidence, find_closest_match, round2,
};
use anemia_model::{Dataset, Row, Severity};
use proptest::prelude::*;

proptest! {
    #[test]
    fn severity_bands(value in -5.0f64..30.0) {
        let expected = if value >= 12.0 {
            Severity::Normal
        } else if value >= 10.0 {
            Severity::Mild
        } else if value >= 8.0 {
            Severity::Moderate
        } else {
            Severity::Severe
        };
        prop_assert_eq!(classify_by_value(value).status, expected);
    }

    #[test]
    fn classify_confidence_follows_proximity_rule(value in 0.0f64..20.0) {
        let deduction: f64 = THRESHOLDS
            .iter()
            .map(|threshold| (value - threshold).abs())
            .filter(|distance| *distance < 0.5)
            .map(|distance| (0.5 - distance) * 0.1)
            .sum();
        let result = classify_by_value(value);
        prop_assert_eq!(result.confidence, round2(0.85 - deduction));
        prop_assert!(result.confidence >= 0.8 && result.confidence <= 0.85);
        prop_assert_eq!(result.hemoglobin, value);
    }

    #[test]
    fn match_confidence_is_bounded_and_monotonic(a in 0.0f64..50.0, b in 0.0f64..50.0) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let near_confidence = compute_match_confidence(near);
        let far_confidence = compute_match_confidence(far);
        prop_assert!((0.75..=0.98).contains(&near_confidence));
        prop_assert!((0.75..=0.98).contains(&far_confidence));
        prop_assert!(near_confidence >= far_confidence);
    }

    #[test]
    fn closest_match_minimizes_distance(
        values in prop::collection::vec(4.0f64..18.0, 1..40),
        target in 4.0f64..18.0,
    ) {
        let dataset: Dataset = values.iter().map(|v| Row::new().with("HGB", *v)).collect();
        let result = find_closest_match(&dataset, target).expect("match");
        let best = values
            .iter()
            .map(|v| (v - target).abs())
            .fold(f64::INFINITY, f64::min);
        prop_assert_eq!((result.hemoglobin - target).abs(), best);
        // Earliest row at the minimal distance
        let first = values
            .iter()
            .find(|v| (*v - target).abs() == best)
            .copied()
            .expect("minimum exists");
        prop_assert_eq!(result.hemoglobin, first);
    }
}

#[test]
fn documented_confidence_points() {
    assert_eq!(classify_by_value(10.0).confidence, 0.8);
    assert_eq!(classify_by_value(10.3).confidence, 0.83);
    assert_eq!(classify_by_value(10.5).confidence, 0.85);
    assert_eq!(compute_match_confidence(0.0), 0.98);
    assert_eq!(compute_match_confidence(2.0), 0.8);
    assert_eq!(compute_match_confidence(100.0), 0.75);
}
