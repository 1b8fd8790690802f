use std::path::PathBuf;

use clap::Args;

use crate::cli::{DatasetArgs, OutputFormat};
use crate::core::types::Frequency;

/// Number of rows shown in each frequency table by default
pub const DEFAULT_TOP: usize = 50;

#[derive(Args)]
pub struct StatsArgs {
    /// Number of diseases and symptoms to list
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
    pub top: usize,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

#[derive(Args)]
pub struct PrecautionsArgs {
    /// Disease name, exactly as written in the dataset
    #[arg(required = true)]
    pub disease: String,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file path; prints to stdout if not given
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Execute symptoms subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_symptoms(args: DatasetArgs, format: OutputFormat) -> anyhow::Result<()> {
    let dataset = args.load()?;
    let symptoms = dataset.symptom_universe();

    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            for symptom in symptoms {
                println!("{symptom}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "count": symptoms.len(),
                "symptoms": symptoms,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Execute stats subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_stats(args: StatsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let dataset = args.dataset.load()?;
    let summary = dataset.summary();
    let diseases = dataset.disease_frequencies(args.top);
    let symptoms = dataset.symptom_frequencies(args.top);

    match format {
        OutputFormat::Text => {
            println!("Dataset Statistics");
            println!("{}", "=".repeat(60));
            println!("  Total Diseases: {}", summary.disease_count);
            println!("  Total Symptoms: {}", summary.symptom_count);
            println!("  Precaution Records: {}", summary.precaution_record_count);

            print_text_frequencies("Rows per disease", &diseases);
            print_text_frequencies("Symptom occurrences", &symptoms);
            println!();
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "summary": summary,
                "diseases": diseases,
                "symptoms": symptoms,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("kind\tname\tcount");
            for f in &diseases {
                println!("disease\t{}\t{}", f.name, f.count);
            }
            for f in &symptoms {
                println!("symptom\t{}\t{}", f.name, f.count);
            }
        }
    }

    Ok(())
}

fn print_text_frequencies(title: &str, frequencies: &[Frequency]) {
    println!("\n{title}:");
    let width = frequencies.iter().map(|f| f.name.len()).max().unwrap_or(0);
    for f in frequencies {
        println!("  {:<width$}  {}", f.name, f.count);
    }
}

/// Execute precautions subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_precautions(args: PrecautionsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let dataset = args.dataset.load()?;
    let precautions = dataset.precautions_for(&args.disease);

    match format {
        OutputFormat::Text => {
            if precautions.is_empty() {
                println!("No precautions available for '{}'.", args.disease);
            } else {
                println!("Precautions for {}:", args.disease);
                for precaution in precautions {
                    println!("   - {precaution}");
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "disease": args.disease,
                "precautions": precautions,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            for precaution in precautions {
                println!("{}\t{precaution}", args.disease);
            }
        }
    }

    Ok(())
}

/// Execute export subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_export(args: ExportArgs, verbose: bool) -> anyhow::Result<()> {
    let dataset = args.dataset.load()?;
    let json = dataset.to_json()?;

    if let Some(path) = &args.output {
        std::fs::write(path, json)?;
        if verbose {
            eprintln!(
                "Exported {} disease rows and {} precaution rows to {}",
                dataset.len(),
                dataset.precautions().len(),
                path.display()
            );
        }
    } else {
        println!("{json}");
    }

    Ok(())
}
