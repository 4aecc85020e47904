//! Dataset ingestion for anemia screening.
//!
//! This crate turns uploaded spreadsheets into [`anemia_model::Dataset`]s.
//!
//! # Features
//!
//! - **CSV Loading**: Polars reader with schema inference
//! - **Excel Loading**: first worksheet of xlsx/xls/ods workbooks via calamine
//! - **Upload Validation**: non-empty, required column keywords present
//! - **Image Checks**: conjunctiva image path existence and extension
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use anemia_ingest::{IngestOptions, read_dataset};
//!
//! let dataset = read_dataset(Path::new("records.xlsx"), &IngestOptions::default())?;
//! println!("{} records", dataset.len());
//! ```

mod csv;
mod error;
mod excel;
mod header;
mod image;
mod options;
mod polars_utils;
mod reader;
mod validate;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use csv::{read_csv_dataset, read_csv_frame};
pub use excel::{data_to_cell, read_excel_dataset, rows_to_dataset};
pub use polars_utils::{any_to_cell, dataframe_to_dataset};
pub use reader::{DatasetFormat, read_dataset};

// === Options and Validation ===
pub use options::{DEFAULT_INFER_SCHEMA_LENGTH, DEFAULT_REQUIRED_COLUMNS, IngestOptions};
pub use validate::{missing_required_columns, validate_dataset};

// === Images ===
pub use image::{IMAGE_EXTENSIONS, is_image_path, validate_image_path};

// === Headers ===
pub use header::{normalize_header, normalize_headers};
