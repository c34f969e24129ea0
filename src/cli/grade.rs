//! Grade command - baseline words-correct-per-minute for a dataset.

use std::path::PathBuf;

use clap::Args;

use crate::cli::features::load_table;
use crate::cli::{format_value, NormalizerArgs, OutputFormat};
use crate::config::HypothesisSource;
use crate::grading::{grade_table, BaselineGrader, GradeSummary, Grader, Prediction};
use crate::parsing::DatasetFormat;

#[derive(Args)]
pub struct GradeArgs {
    /// Dataset file (.json, .jsonl, .ndjson, .csv or .tsv, optionally .gz)
    /// Use '-' for stdin (JSON Lines unless --input-format says otherwise)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (detected from the file extension by default)
    #[arg(long)]
    pub input_format: Option<DatasetFormat>,

    /// Transcript to score against the prompt [default: asr, or the config file's choice]
    #[arg(long)]
    pub hypothesis: Option<HypothesisSource>,

    #[command(flatten)]
    pub normalizer: NormalizerArgs,
}

/// Execute the grade command
///
/// Readings with non-finite features (zero or negative duration) are skipped
/// with a warning.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or a record cannot be scored.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: GradeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut table = load_table(
        &args.input,
        args.input_format,
        args.hypothesis,
        &args.normalizer,
        verbose,
    )?;
    table.drop_non_finite();

    let grader = BaselineGrader;
    if verbose {
        eprintln!("Grading {} readings with the {} grader", table.len(), grader.name());
    }

    let predictions = grade_table(&grader, &table)?;
    let summary = GradeSummary::evaluate(&predictions);

    match format {
        OutputFormat::Text => print_text(&predictions, summary.as_ref()),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "grader": grader.name(),
                "predictions": predictions,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("id\twcpm\thuman_wcpm");
            for (i, p) in predictions.iter().enumerate() {
                println!(
                    "{}\t{}\t{}",
                    label(i, p),
                    format_value(p.wcpm),
                    p.human_wcpm.map(format_value).unwrap_or_default()
                );
            }
        }
    }

    Ok(())
}

fn label(index: usize, prediction: &Prediction) -> String {
    prediction
        .id
        .clone()
        .unwrap_or_else(|| format!("#{}", index + 1))
}

fn print_text(predictions: &[Prediction], summary: Option<&GradeSummary>) {
    if predictions.is_empty() {
        println!("No readings to grade.");
        return;
    }

    println!("{:<12}{:>10}{:>12}", "Reading", "WCPM", "Human");
    for (i, p) in predictions.iter().enumerate() {
        let human = p.human_wcpm.map(format_value).unwrap_or_else(|| "-".to_string());
        println!("{:<12}{:>10}{:>12}", label(i, p), format_value(p.wcpm), human);
    }

    if let Some(summary) = summary {
        println!(
            "\n{} labeled readings: MAE {:.2}, RMSE {:.2}",
            summary.labeled, summary.mean_absolute_error, summary.root_mean_squared_error
        );
    }
}
