//! Command pipelines driven from files on disk.

use std::io::Write;

use anemia_cli::pipeline::{
    analyze_report, classify_report, load_dataset, match_report, summary_report,
};
use anemia_cli::report::{ResultSource, render_json};
use anemia_model::{CellValue, Severity};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

const PATIENTS_CSV: &str = "\
Patient,Hemoglobin,Anemia_Status,Age (Months),GENDER,Severity,REMARK
P1,11.2,Anemic,24,Female,Mild,follow up
P2,13.4,Normal,36,Male,Non-anemic,
P3,7.6,Anemic,18,Female,Severe,refer
";

fn temp_file(suffix: &str, contents: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents).expect("write file");
    file
}

#[test]
fn classify_report_uses_thresholds() {
    let report = classify_report(9.5);

    assert_eq!(report.source, ResultSource::Threshold);
    assert_eq!(report.result.status, Severity::Moderate);
    assert_eq!(report.result.confidence, 0.85);
    assert!(report.result.patient_info.is_none());
}

#[test]
fn match_report_reads_patient_fields() {
    let file = temp_file(".csv", PATIENTS_CSV.as_bytes());
    let dataset = load_dataset(file.path(), false).expect("load dataset");

    let report = match_report(&dataset, 11.0).expect("match");

    assert_eq!(report.source, ResultSource::DatasetMatch);
    assert_eq!(report.result.hemoglobin, 11.2);
    assert_eq!(report.result.status, Severity::Mild);
    assert_eq!(report.result.confidence, 0.98);
    let info = report.result.patient_info.expect("patient info");
    assert_eq!(info.gender, Some(CellValue::text("Female")));
    assert_eq!(info.remark, Some(CellValue::text("follow up")));
}

#[test]
fn match_report_none_without_hemoglobin_values() {
    let file = temp_file(".csv", b"Patient,Status\nP1,Mild\n");
    let dataset = load_dataset(file.path(), true).expect("load dataset");

    assert!(match_report(&dataset, 10.0).is_none());
    assert!(summary_report(&dataset).is_none());
}

#[test]
fn match_report_none_for_non_finite_target() {
    let file = temp_file(".csv", PATIENTS_CSV.as_bytes());
    let dataset = load_dataset(file.path(), false).expect("load dataset");

    assert!(match_report(&dataset, f64::NAN).is_none());
    assert!(match_report(&dataset, f64::INFINITY).is_none());
}

#[test]
fn strict_load_reports_missing_columns() {
    let file = temp_file(".csv", b"HGB,Age\n10.1,30\n");

    let err = load_dataset(file.path(), false).unwrap_err();

    assert!(format!("{err:#}").contains("missing required columns"));
}

#[test]
fn summary_report_counts_values() {
    let file = temp_file(".csv", PATIENTS_CSV.as_bytes());
    let dataset = load_dataset(file.path(), false).expect("load dataset");

    let report = summary_report(&dataset).expect("summary");

    assert_eq!(report.records, 3);
    assert_eq!(report.statistics.column, "Hemoglobin");
    assert_eq!(report.statistics.count, 3);
    assert_eq!(report.statistics.min, 7.6);
    assert_eq!(report.statistics.max, 13.4);
}

#[test]
fn analyze_report_is_reproducible_with_seed() {
    let image = temp_file(".png", b"\x89PNG");

    let first = analyze_report(image.path(), None, &mut StdRng::seed_from_u64(7)).expect("analyze");
    let second = analyze_report(image.path(), None, &mut StdRng::seed_from_u64(7)).expect("analyze");

    assert_eq!(first.source, ResultSource::SimulatedImage);
    assert_eq!(first.result.hemoglobin, second.result.hemoglobin);
    assert_eq!(first.result.confidence, second.result.confidence);
    assert!((8.0..=15.0).contains(&first.result.hemoglobin));
    assert!(first.dataset_match.is_none());
}

#[test]
fn analyze_report_cross_checks_dataset() {
    let image = temp_file(".jpg", b"jpeg");
    let file = temp_file(".csv", PATIENTS_CSV.as_bytes());
    let dataset = load_dataset(file.path(), false).expect("load dataset");

    let report = analyze_report(image.path(), Some(&dataset), &mut StdRng::seed_from_u64(42))
        .expect("analyze");

    let matched = report.dataset_match.as_ref().expect("dataset match");
    assert!([7.6, 11.2, 13.4].contains(&matched.hemoglobin));
    let json = render_json(&report).expect("json");
    assert!(json.contains("\"dataset_match\""));
}

#[test]
fn analyze_report_rejects_non_image() {
    let file = temp_file(".txt", b"not an image");

    assert!(analyze_report(file.path(), None, &mut StdRng::seed_from_u64(1)).is_err());
}
