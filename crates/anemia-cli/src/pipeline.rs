//! Command pipelines: load inputs, run the analysis, build a report.
//!
//! Printing is left to the binary so these functions stay testable.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, info};

use anemia_analysis::{classify_by_value, find_closest_match, simulate_reading, summarize_dataset};
use anemia_ingest::{IngestOptions, read_dataset, validate_image_path};
use anemia_model::{ClassificationResult, Dataset};

use crate::logging::redact_value;
use crate::report::{AnalysisReport, ResultSource, SummaryReport};

/// Loads a dataset, requiring the default columns unless `lenient`.
pub fn load_dataset(path: &Path, lenient: bool) -> Result<Dataset> {
    let options = if lenient {
        IngestOptions::lenient()
    } else {
        IngestOptions::default()
    };
    let start = Instant::now();
    let dataset = read_dataset(path, &options)
        .with_context(|| format!("load dataset {}", path.display()))?;
    debug!(
        path = %path.display(),
        duration_ms = start.elapsed().as_millis(),
        "dataset ready"
    );
    Ok(dataset)
}

/// Threshold classification of an entered value.
pub fn classify_report(hemoglobin: f64) -> AnalysisReport {
    AnalysisReport::new(ResultSource::Threshold, classify_by_value(hemoglobin))
}

/// Closest-record lookup; `None` when the dataset cannot answer.
pub fn match_report(dataset: &Dataset, hemoglobin: f64) -> Option<AnalysisReport> {
    let matched = find_closest_match(dataset, hemoglobin)?;
    log_match(&matched);
    Some(AnalysisReport::new(ResultSource::DatasetMatch, matched))
}

/// Hemoglobin statistics; `None` when the dataset cannot answer.
pub fn summary_report(dataset: &Dataset) -> Option<SummaryReport> {
    let statistics = summarize_dataset(dataset)?;
    info!(
        column = %statistics.column,
        records = dataset.len(),
        values = statistics.count,
        "dataset summarized"
    );
    Some(SummaryReport {
        records: dataset.len(),
        statistics,
    })
}

/// Simulated image analysis, cross-checked against `dataset` when given.
///
/// The image is only checked for existence and type.
pub fn analyze_report<R: Rng>(
    image: &Path,
    dataset: Option<&Dataset>,
    rng: &mut R,
) -> Result<AnalysisReport> {
    validate_image_path(image).with_context(|| format!("check image {}", image.display()))?;
    let reading = simulate_reading(rng);
    info!(
        image = %image.display(),
        hemoglobin = reading.hemoglobin,
        confidence = reading.confidence,
        "simulated image analysis"
    );

    let dataset_match = dataset.and_then(|data| {
        let matched = find_closest_match(data, reading.hemoglobin);
        match &matched {
            Some(result) => log_match(result),
            None => debug!("dataset has no match for simulated reading"),
        }
        matched
    });

    Ok(AnalysisReport::new(ResultSource::SimulatedImage, reading.into_result())
        .with_dataset_match(dataset_match))
}

fn log_match(result: &ClassificationResult) {
    let info = result.patient_info.clone().unwrap_or_default();
    let age = info.age.as_ref().map(ToString::to_string).unwrap_or_default();
    let gender = info.gender.as_ref().map(ToString::to_string).unwrap_or_default();
    debug!(
        hemoglobin = result.hemoglobin,
        status = %result.status,
        confidence = result.confidence,
        age = redact_value(&age),
        gender = redact_value(&gender),
        "matched dataset record"
    );
}
