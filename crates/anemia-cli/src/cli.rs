//! CLI argument definitions for the anemia screening demonstrator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "anemia",
    version,
    about = "Anemia screening demonstrator - classify hemoglobin readings",
    long_about = "Classify hemoglobin readings into anemia severity bands.\n\n\
                  Readings can be entered directly, matched against an uploaded patient\n\
                  dataset (CSV or Excel), or simulated from a conjunctiva image.\n\
                  The image is never analyzed: simulated readings are for demonstration only."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient values (age, gender, remarks) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify a single hemoglobin value by clinical thresholds.
    Classify(ClassifyArgs),

    /// Find the dataset record closest to a hemoglobin value.
    Match(MatchArgs),

    /// Summarize the hemoglobin column of a dataset.
    Summary(SummaryArgs),

    /// Simulate a conjunctiva image analysis.
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Hemoglobin value in g/dL.
    #[arg(
        value_name = "HEMOGLOBIN",
        allow_negative_numbers = true,
        value_parser = parse_hemoglobin
    )]
    pub hemoglobin: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Target hemoglobin value in g/dL.
    #[arg(
        long = "hemoglobin",
        value_name = "G_DL",
        allow_negative_numbers = true,
        value_parser = parse_hemoglobin
    )]
    pub hemoglobin: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Conjunctiva image (png, jpg, ...). Only its presence is checked.
    #[arg(long = "image", value_name = "FILE")]
    pub image: PathBuf,

    /// Optional dataset to match the simulated reading against.
    #[arg(long = "dataset", value_name = "FILE")]
    pub dataset: Option<PathBuf>,

    /// Accept datasets without "hemoglobin" and "status" columns.
    #[arg(long = "lenient")]
    pub lenient: bool,

    /// Seed for a reproducible simulated reading.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct DatasetArgs {
    /// Dataset file (.csv, .xlsx, .xls).
    #[arg(long = "dataset", value_name = "FILE")]
    pub path: PathBuf,

    /// Accept datasets without "hemoglobin" and "status" columns.
    #[arg(long = "lenient")]
    pub lenient: bool,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Output format for results.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

/// Result output choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Parses a hemoglobin argument, rejecting NaN and infinities.
fn parse_hemoglobin(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(format!("'{value}' is not a finite hemoglobin value"))
    }
}
