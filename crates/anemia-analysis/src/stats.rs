//! Aggregate statistics over the hemoglobin column.

use anemia_model::{CellValue, Dataset, DatasetStatistics};

use crate::columns::locate_hemoglobin_column;

/// Count, min, max and mean of every parseable hemoglobin value.
///
/// Unparseable cells are skipped. Returns `None` for an empty dataset, a
/// dataset without a hemoglobin column, or one where nothing parses.
pub fn summarize_dataset(dataset: &Dataset) -> Option<DatasetStatistics> {
    let column = locate_hemoglobin_column(dataset)?;
    let values: Vec<f64> = dataset
        .rows()
        .iter()
        .filter_map(|row| row.get(&column).and_then(CellValue::as_f64))
        .collect();

    let excluded = dataset.len() - values.len();
    if excluded > 0 {
        tracing::debug!(column = %column, excluded, "excluded unparseable hemoglobin values");
    }
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / count as f64;

    Some(DatasetStatistics {
        column,
        count,
        min,
        max,
        mean,
    })
}
