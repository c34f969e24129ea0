//! Compare command - align one prompt with one transcript.
//!
//! Shows the full edit script, which trailing entries the tail trim removed,
//! the word classification and the resulting features.

use clap::Args;

use crate::alignment::{classify, edit_script, tail_trim};
use crate::cli::{format_value, NormalizerArgs, OutputFormat};
use crate::core::types::EditOp;
use crate::features::aggregate;
use crate::preprocess::TextNormalizer;

#[derive(Args)]
pub struct CompareArgs {
    /// Prompt text the reader was asked to read
    #[arg(required = true)]
    pub reference: String,

    /// Transcript of the reading
    #[arg(required = true)]
    pub hypothesis: String,

    /// Reading duration in seconds
    #[arg(short, long, default_value = "60")]
    pub duration: f64,

    #[command(flatten)]
    pub normalizer: NormalizerArgs,
}

/// Execute the compare command
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded, the transcript is not a
/// valid segment list (with `--asr-segments`), or a text is too long to align.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let settings = args.normalizer.settings()?;
    let normalizer = TextNormalizer::new(settings.normalizer);

    let prompt = normalizer.normalize(&args.reference);
    let transcript = normalizer.normalize_transcript(&args.hypothesis)?;
    if verbose {
        eprintln!("Prompt: {prompt}");
        eprintln!("Transcript: {transcript}");
    }

    let reference: Vec<&str> = prompt.split_whitespace().collect();
    let hypothesis: Vec<&str> = transcript.split_whitespace().collect();

    let full_script = edit_script(&reference, &hypothesis)?;
    let mut script = full_script.clone();
    tail_trim(&mut script);
    let trimmed = &full_script[script.len()..];

    let classification = classify(&script);
    let features = aggregate(
        &classification,
        hypothesis.len(),
        args.duration,
        &reference,
        &hypothesis,
    );

    match format {
        OutputFormat::Text => {
            println!("Edit script:");
            for op in &script {
                println!("   {op}");
            }
            if !trimmed.is_empty() {
                println!("   (trimmed {} trailing entries)", trimmed.len());
                for op in trimmed {
                    println!("   {op}");
                }
            }

            println!(
                "\nWords: {} correct, {} added, {} removed, {} replaced",
                classification.correct,
                classification.added,
                classification.removed,
                classification.replaced(),
            );
            for pair in &classification.error_pairs {
                println!("   {} → {}", pair.reference, pair.hypothesis);
            }

            println!("\nFeatures ({:.1} s):", args.duration);
            for (name, value) in features.iter() {
                println!("   {name:<24}{:>10}", format_value(value));
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "reference": prompt,
                "hypothesis": transcript,
                "duration_seconds": args.duration,
                "edit_script": script,
                "trimmed": trimmed,
                "classification": {
                    "correct": classification.correct,
                    "added": classification.added,
                    "removed": classification.removed,
                    "replaced": classification.replaced(),
                    "error_pairs": classification.error_pairs,
                },
                "features": features,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("kind\tkey\tvalue");
            print_tsv_ops("op", &script);
            print_tsv_ops("trimmed", trimmed);
            let counts = [
                ("correct", classification.correct),
                ("added", classification.added),
                ("removed", classification.removed),
                ("replaced", classification.replaced()),
            ];
            for (name, count) in counts {
                println!("count\t{name}\t{count}");
            }
            for pair in &classification.error_pairs {
                println!("replaced\t{}\t{}", pair.reference, pair.hypothesis);
            }
            for (name, value) in features.iter() {
                println!("feature\t{name}\t{}", format_value(value));
            }
        }
    }

    Ok(())
}

fn print_tsv_ops(kind: &str, ops: &[EditOp<'_>]) {
    for op in ops {
        println!("{kind}\t{}\t{}", op.tag, op.token);
    }
}
