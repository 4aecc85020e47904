use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info_span, warn};

use anemia_cli::pipeline::{
    analyze_report, classify_report, load_dataset, match_report, summary_report,
};
use anemia_cli::report::{
    AnalysisReport, ResultSource, classification_table, render_json, statistics_table,
};

use crate::cli::{AnalyzeArgs, ClassifyArgs, MatchArgs, OutputFormatArg, SummaryArgs};

/// How a command ended when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Completed,
    /// Inputs were valid but produced no result (already reported as a warning).
    NoResult,
}

pub fn run_classify(args: &ClassifyArgs) -> Result<CommandOutcome> {
    let _guard = info_span!("classify", hemoglobin = args.hemoglobin).entered();
    let report = classify_report(args.hemoglobin);
    print_analysis(&report, args.output.format)?;
    Ok(CommandOutcome::Completed)
}

pub fn run_match(args: &MatchArgs) -> Result<CommandOutcome> {
    let _guard = info_span!("match", dataset = %args.dataset.path.display()).entered();
    let dataset = load_dataset(&args.dataset.path, args.dataset.lenient)?;
    let Some(report) = match_report(&dataset, args.hemoglobin) else {
        warn!(
            records = dataset.len(),
            "no matching record: dataset has no usable hemoglobin column or values"
        );
        return Ok(CommandOutcome::NoResult);
    };
    print_analysis(&report, args.output.format)?;
    Ok(CommandOutcome::Completed)
}

pub fn run_summary(args: &SummaryArgs) -> Result<CommandOutcome> {
    let _guard = info_span!("summary", dataset = %args.dataset.path.display()).entered();
    let dataset = load_dataset(&args.dataset.path, args.dataset.lenient)?;
    let Some(report) = summary_report(&dataset) else {
        warn!(
            records = dataset.len(),
            "no statistics: dataset has no usable hemoglobin column or values"
        );
        return Ok(CommandOutcome::NoResult);
    };
    match args.output.format {
        OutputFormatArg::Table => println!("{}", statistics_table(&report)),
        OutputFormatArg::Json => println!("{}", render_json(&report).context("render json")?),
    }
    Ok(CommandOutcome::Completed)
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<CommandOutcome> {
    let _guard = info_span!("analyze", image = %args.image.display()).entered();
    let dataset = args
        .dataset
        .as_deref()
        .map(|path| load_dataset(path, args.lenient))
        .transpose()?;
    let report = match args.seed {
        Some(seed) => analyze_report(&args.image, dataset.as_ref(), &mut StdRng::seed_from_u64(seed))?,
        None => analyze_report(&args.image, dataset.as_ref(), &mut rand::rng())?,
    };
    if dataset.is_some() && report.dataset_match.is_none() {
        warn!("dataset has no usable hemoglobin column or values; showing simulated reading only");
    }
    print_analysis(&report, args.output.format)?;
    Ok(CommandOutcome::Completed)
}

fn print_analysis(report: &AnalysisReport, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => {
            println!("{}", classification_table(report.source, &report.result));
            if let Some(matched) = &report.dataset_match {
                println!("{}", classification_table(ResultSource::DatasetMatch, matched));
            }
            if report.source == ResultSource::SimulatedImage {
                println!("Simulated result for demonstration only; not a medical diagnosis.");
            }
        }
        OutputFormatArg::Json => println!("{}", render_json(report).context("render json")?),
    }
    Ok(())
}
