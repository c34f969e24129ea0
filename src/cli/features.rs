//! Features command - compute the feature table for a dataset.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{format_value, NormalizerArgs, OutputFormat};
use crate::config::HypothesisSource;
use crate::core::features::FeatureVector;
use crate::features::{FeatureRow, FeatureTable};
use crate::parsing::{parse_dataset_file, DatasetFormat};
use crate::preprocess::{LoggingObserver, Preprocessor, SilentObserver, StageObserver};

#[derive(Args)]
pub struct FeaturesArgs {
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

    /// Leave out readings whose features are not finite (zero or negative duration)
    #[arg(long)]
    pub drop_non_finite: bool,

    #[command(flatten)]
    pub normalizer: NormalizerArgs,
}

/// Execute the features command
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or a record cannot be scored.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: FeaturesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut table = load_table(
        &args.input,
        args.input_format,
        args.hypothesis,
        &args.normalizer,
        verbose,
    )?;

    if args.drop_non_finite {
        let dropped = table.drop_non_finite();
        if verbose {
            eprintln!("Dropped {dropped} readings with non-finite features");
        }
    }

    match format {
        OutputFormat::Text => print_text(&table),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table.rows)?),
        OutputFormat::Tsv => print_tsv(&table),
    }

    Ok(())
}

/// Load a dataset, normalize it and build its feature table
pub(crate) fn load_table(
    input: &std::path::Path,
    input_format: Option<DatasetFormat>,
    hypothesis: Option<HypothesisSource>,
    normalizer: &NormalizerArgs,
    verbose: bool,
) -> anyhow::Result<FeatureTable> {
    let settings = normalizer.settings()?;
    let hypothesis = hypothesis.unwrap_or(settings.hypothesis);
    let records = parse_dataset_file(input, input_format, &settings.columns)?;
    if verbose {
        eprintln!("Loaded {} readings from {}", records.len(), input.display());
    }

    let logging = LoggingObserver::default();
    let observer: &dyn StageObserver = if verbose {
        &logging
    } else {
        &SilentObserver
    };

    if verbose {
        eprintln!("Scoring prompts against the {hypothesis} transcript");
    }

    let preprocessor = Preprocessor::new(settings.normalizer).with_hypothesis(hypothesis);
    Ok(preprocessor.run(&records, observer)?)
}

fn row_label(index: usize, row: &FeatureRow) -> String {
    row.id.clone().unwrap_or_else(|| format!("#{}", index + 1))
}

fn print_text(table: &FeatureTable) {
    if table.is_empty() {
        println!("No readings.");
        return;
    }

    let width = FeatureVector::NAMES.iter().map(|n| n.len()).max().unwrap_or(0);

    for (i, row) in table.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Reading {}", row_label(i, row));
        for (name, value) in row.features.iter() {
            println!("   {name:<width$}  {:>10}", format_value(value));
        }
        if let Some(human) = row.human_wcpm {
            println!("   {:<width$}  {:>10}", "human_wcpm", format_value(human));
        }
        if !row.error_pairs.is_empty() {
            let pairs: Vec<String> = row
                .error_pairs
                .iter()
                .map(|p| format!("{} → {}", p.reference, p.hypothesis))
                .collect();
            println!("   Replaced: {}", pairs.join(", "));
        }
    }
}

fn print_tsv(table: &FeatureTable) {
    println!("id\t{}\thuman_wcpm", FeatureVector::NAMES.join("\t"));

    for (i, row) in table.iter().enumerate() {
        let values: Vec<String> = row.features.values().into_iter().map(format_value).collect();
        let human = row.human_wcpm.map(format_value).unwrap_or_default();
        println!("{}\t{}\t{human}", row_label(i, row), values.join("\t"));
    }
}
