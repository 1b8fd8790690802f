use clap::Args;

use crate::cli::{DatasetArgs, OutputFormat};
use crate::core::types::{Prediction, SymptomSelection};
use crate::matching::engine::MatchingEngine;
use crate::utils::validation::{validate_selection, MAX_SELECTED_SYMPTOMS};

#[derive(Args)]
pub struct PredictArgs {
    /// Symptoms to match, exactly as listed by `symptom-match symptoms` (1 or 2)
    #[arg(required = true)]
    pub symptoms: Vec<String>,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Execute predict subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or the symptom selection
/// is invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PredictArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let dataset = args.dataset.load()?;

    if verbose {
        let summary = dataset.summary();
        eprintln!(
            "Loaded {} disease rows ({} diseases, {} symptoms)",
            dataset.len(),
            summary.disease_count,
            summary.symptom_count
        );
    }

    let engine = MatchingEngine::new(&dataset);
    let selection = validate_selection(&args.symptoms, engine.symptom_universe())?;

    let Some(prediction) = engine.predict(&selection) else {
        eprintln!("No prediction available: the disease table is empty.");
        return Ok(());
    };

    match format {
        OutputFormat::Text => print_text_prediction(&prediction, &selection, verbose),
        OutputFormat::Json => print_json_prediction(&prediction, &selection)?,
        OutputFormat::Tsv => print_tsv_prediction(&prediction),
    }

    Ok(())
}

fn print_text_prediction(prediction: &Prediction, selection: &SymptomSelection, verbose: bool) {
    println!("\nPredicted Disease: {}", prediction.disease);
    println!(
        "   Score: {} of {} selected symptom(s)",
        prediction.score,
        selection.len()
    );
    if !prediction.matched_symptoms.is_empty() {
        println!("   Matched: {}", prediction.matched_symptoms.join(", "));
    }

    if prediction.precautions.is_empty() {
        println!("\nNo precautions available.");
    } else {
        println!("\nRecommended Precautions:");
        for precaution in &prediction.precautions {
            println!("   - {precaution}");
        }
    }

    if verbose {
        println!("\nSelected Symptoms:");
        for symptom in selection.iter() {
            println!("   - {symptom}");
        }
        println!("   (at most {MAX_SELECTED_SYMPTOMS} symptoms per prediction)");
    }

    println!();
}

fn print_json_prediction(
    prediction: &Prediction,
    selection: &SymptomSelection,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "selected_symptoms": selection,
        "prediction": prediction,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_prediction(prediction: &Prediction) {
    println!("disease\tscore\tmatched_symptoms\tprecautions");
    println!(
        "{}\t{}\t{}\t{}",
        prediction.disease,
        prediction.score,
        prediction.matched_symptoms.join(";"),
        prediction.precautions.join(";"),
    );
}
