//! CSV loading through Polars.

use std::path::Path;

use anemia_model::Dataset;
use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::polars_utils::dataframe_to_dataset;

/// Reads a CSV file (first line is the header) into a DataFrame.
pub fn read_csv_frame(path: &Path, infer_schema_length: Option<usize>) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(infer_schema_length)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Reads a CSV file into a [`Dataset`].
pub fn read_csv_dataset(path: &Path, infer_schema_length: Option<usize>) -> Result<Dataset> {
    let df = read_csv_frame(path, infer_schema_length)?;
    dataframe_to_dataset(&df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anemia_model::CellValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_dataset_numeric_inference() {
        let file = create_temp_csv("HGB,Status\n11.5,Mild\n13,Normal\n");
        let dataset = read_csv_dataset(file.path(), Some(100)).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.columns(), vec!["HGB", "Status"]);
        assert_eq!(dataset.rows()[1].get("HGB"), Some(&CellValue::Number(13.0)));
    }

    #[test]
    fn test_read_csv_dataset_mixed_column_stays_text() {
        let file = create_temp_csv("HGB,Status\n10,Mild\nbad,Mild\n14,Normal\n");
        let dataset = read_csv_dataset(file.path(), Some(100)).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows()[1].get("HGB"), Some(&CellValue::text("bad")));
        assert_eq!(dataset.rows()[0].get("HGB").and_then(CellValue::as_f64), Some(10.0));
    }

    #[test]
    fn test_read_csv_dataset_empty_cells() {
        let file = create_temp_csv("HGB,Remark\n9.1,\n");
        let dataset = read_csv_dataset(file.path(), Some(100)).unwrap();

        assert_eq!(dataset.rows()[0].get("Remark"), Some(&CellValue::Missing));
    }
}
