//! Result rendering: comfy-table for humans, JSON for machines.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use anemia_model::{
    CellValue, ClassificationResult, DatasetStatistics, PatientInfo, Severity, format_numeric,
};

/// Where a classification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    /// Direct threshold classification of an entered value.
    Threshold,
    /// Closest record of an uploaded dataset.
    DatasetMatch,
    /// Simulated image reading.
    SimulatedImage,
}

impl ResultSource {
    pub fn label(&self) -> &'static str {
        match self {
            ResultSource::Threshold => "Clinical thresholds",
            ResultSource::DatasetMatch => "Closest dataset record",
            ResultSource::SimulatedImage => "Simulated image analysis",
        }
    }
}

/// A classification plus an optional dataset cross-check, as emitted by commands.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: ResultSource,
    pub result: ClassificationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_match: Option<ClassificationResult>,
}

impl AnalysisReport {
    pub fn new(source: ResultSource, result: ClassificationResult) -> Self {
        Self {
            source,
            result,
            dataset_match: None,
        }
    }

    #[must_use]
    pub fn with_dataset_match(mut self, matched: Option<ClassificationResult>) -> Self {
        self.dataset_match = matched;
        self
    }
}

/// Dataset statistics together with the record count they were drawn from.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub records: usize,
    pub statistics: DatasetStatistics,
}

/// Serializes a report as pretty JSON.
pub fn render_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Builds the table for one classification.
pub fn classification_table(source: ResultSource, result: &ClassificationResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Left);

    table.add_row(vec![Cell::new("Source"), Cell::new(source.label())]);
    table.add_row(vec![Cell::new("Status"), status_cell(result.status)]);
    table.add_row(vec![
        Cell::new("Hemoglobin"),
        Cell::new(format!("{} g/dL", format_numeric(result.hemoglobin))),
    ]);
    table.add_row(vec![
        Cell::new("Confidence"),
        Cell::new(format!("{}%", result.confidence_percent())),
    ]);
    if let Some(info) = &result.patient_info {
        add_patient_rows(&mut table, info);
    }
    table
}

/// Builds the statistics table for a dataset summary.
pub fn statistics_table(report: &SummaryReport) -> Table {
    let stats = &report.statistics;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Records"),
        header_cell("Values"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Mean"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(&stats.column).fg(Color::Blue).add_attribute(Attribute::Bold),
        Cell::new(report.records),
        count_cell(stats.count, report.records),
        Cell::new(format_numeric(stats.min)),
        Cell::new(format_numeric(stats.max)),
        Cell::new(format!("{:.2}", stats.mean)),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn add_patient_rows(table: &mut Table, info: &PatientInfo) {
    let fields: [(&str, &Option<CellValue>); 5] = [
        ("Age", &info.age),
        ("Gender", &info.gender),
        ("Dataset severity", &info.severity),
        ("Predicted status", &info.predicted_status),
        ("Remark", &info.remark),
    ];
    for (label, value) in fields {
        let cell = match value {
            Some(value) => Cell::new(value.to_string()),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(label), cell]);
    }
}

/// Status text colored by severity.
pub fn status_cell(status: Severity) -> Cell {
    Cell::new(status.label())
        .fg(severity_color(status))
        .add_attribute(Attribute::Bold)
}

fn severity_color(status: Severity) -> Color {
    match status {
        Severity::Normal => Color::Green,
        Severity::Mild => Color::Yellow,
        Severity::Moderate => Color::DarkYellow,
        Severity::Severe => Color::Red,
    }
}

fn count_cell(count: usize, total: usize) -> Cell {
    if count < total {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
