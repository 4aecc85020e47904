//! Data model for the anemia screening toolkit.
//!
//! - [`CellValue`]: tagged spreadsheet cell with an explicit numeric parsing rule
//! - [`Row`] / [`Dataset`]: ordered, schema-free tabular data as uploaded
//! - [`Severity`]: hemoglobin severity band
//! - [`ClassificationResult`], [`PatientInfo`], [`DatasetStatistics`]: analysis outputs

pub mod dataset;
pub mod result;
pub mod severity;
pub mod value;

pub use dataset::{Dataset, Row};
pub use result::{ClassificationResult, DatasetStatistics, PatientInfo};
pub use severity::Severity;
pub use value::{CellValue, format_numeric, parse_leading_f64};
