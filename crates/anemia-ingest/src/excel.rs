//! Excel workbook loading through calamine.
//!
//! Only the first worksheet is read. Its first row holds the column names and
//! every following non-blank row becomes a dataset row.

use std::path::Path;

use anemia_model::{CellValue, Dataset, Row};
use calamine::{Data, Reader, open_workbook_auto};

use crate::error::{IngestError, Result};
use crate::header::normalize_headers;

/// Converts a worksheet cell to a dataset cell.
pub fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Missing,
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::String(s) => CellValue::text(s.trim()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        other => CellValue::text(other.to_string()),
    }
}

/// Builds a dataset from worksheet rows, the first row being the header.
pub fn rows_to_dataset<'a, I>(mut rows: I) -> Dataset
where
    I: Iterator<Item = &'a [Data]>,
{
    let Some(header) = rows.next() else {
        return Dataset::default();
    };
    let names = normalize_headers(header.iter().map(ToString::to_string));

    rows.filter_map(|cells| {
        let row: Row = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let cell = cells.get(idx).map(data_to_cell).unwrap_or_default();
                (name.clone(), cell)
            })
            .collect();
        let keep = row.iter().any(|(_, cell)| cell.has_value());
        keep.then_some(row)
    })
    .collect()
}

/// Reads the first worksheet of a workbook into a [`Dataset`].
pub fn read_excel_dataset(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    tracing::debug!(path = %path.display(), sheet = %sheet, "reading worksheet");

    Ok(rows_to_dataset(range.rows()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    #[test]
    fn test_data_to_cell() {
        assert_eq!(data_to_cell(&Data::Empty), CellValue::Missing);
        assert_eq!(data_to_cell(&Data::Int(12)), CellValue::Number(12.0));
        assert_eq!(data_to_cell(&Data::Float(9.7)), CellValue::Number(9.7));
        assert_eq!(data_to_cell(&text(" Mild ")), CellValue::text("Mild"));
        assert_eq!(data_to_cell(&text("")), CellValue::Missing);
    }

    #[test]
    fn test_rows_to_dataset() {
        let sheet = vec![
            vec![text("HGB"), text("Status"), text("REMARK")],
            vec![Data::Float(10.5), text("Mild"), Data::Empty],
            vec![Data::Empty, Data::Empty, Data::Empty],
            vec![Data::Int(13), text("Normal")],
        ];

        let dataset = rows_to_dataset(sheet.iter().map(Vec::as_slice));

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.columns(), vec!["HGB", "Status", "REMARK"]);
        let last = &dataset.rows()[1];
        assert_eq!(last.get("HGB"), Some(&CellValue::Number(13.0)));
        // Short rows are padded with missing cells
        assert_eq!(last.get("REMARK"), Some(&CellValue::Missing));
    }

    #[test]
    fn test_rows_to_dataset_keeps_duplicate_headers() {
        let sheet = vec![
            vec![text("HGB"), text("HGB"), text("Status")],
            vec![Data::Float(10.5), Data::Float(12.1), text("Mild")],
        ];

        let dataset = rows_to_dataset(sheet.iter().map(Vec::as_slice));

        assert_eq!(dataset.columns(), vec!["HGB", "HGB_1", "Status"]);
        let row = &dataset.rows()[0];
        assert_eq!(row.get("HGB"), Some(&CellValue::Number(10.5)));
        assert_eq!(row.get("HGB_1"), Some(&CellValue::Number(12.1)));
    }

    #[test]
    fn test_rows_to_dataset_header_only() {
        let sheet = vec![vec![text("HGB")]];
        assert!(rows_to_dataset(sheet.iter().map(Vec::as_slice)).is_empty());
        assert!(rows_to_dataset(std::iter::empty()).is_empty());
    }
}
