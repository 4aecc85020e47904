//! Polars to dataset conversion.

use anemia_model::{CellValue, Dataset, Row};
use polars::prelude::*;

use crate::error::Result;
use crate::header::normalize_headers;

/// Converts a Polars `AnyValue` to a dataset cell.
///
/// Numeric types become [`CellValue::Number`], null and blank strings become
/// [`CellValue::Missing`], everything else is kept as text.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::Int8(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int16(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int32(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int64(v) => CellValue::Number(v as f64),
        AnyValue::UInt8(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt16(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt32(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt64(v) => CellValue::Number(v as f64),
        AnyValue::Float32(v) => CellValue::Number(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Number(v),
        AnyValue::String(s) => CellValue::text(s.trim()),
        AnyValue::StringOwned(s) => CellValue::text(s.trim()),
        AnyValue::Boolean(b) => CellValue::Text(b.to_string()),
        other => CellValue::text(other.to_string()),
    }
}

/// Converts every row of a DataFrame into a [`Dataset`], keeping column order.
pub fn dataframe_to_dataset(df: &DataFrame) -> Result<Dataset> {
    let columns = df.get_columns();
    let names = normalize_headers(columns.iter().map(|col| col.name().to_string()));
    let mut rows = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let mut row = Row::new();
        for (name, col) in names.iter().zip(columns) {
            row.insert(name.clone(), any_to_cell(col.get(idx)?));
        }
        if row.iter().all(|(_, cell)| !cell.has_value()) {
            continue;
        }
        rows.push(row);
    }

    Ok(Dataset::new(rows))
}
