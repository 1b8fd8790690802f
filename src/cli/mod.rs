//! Command-line interface for symptom-match.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **predict**: Predict the disease for one or two symptoms
//! - **symptoms**: List every known symptom
//! - **stats**: Show dataset counters and frequency tables
//! - **precautions**: Look up the precautions for a disease
//! - **export**: Write the loaded dataset as JSON
//! - **serve**: Start the JSON HTTP API
//!
//! ## Usage
//!
//! ```text
//! # Predict from the embedded dataset
//! symptom-match predict itching skin_rash
//!
//! # Use your own tables
//! symptom-match predict cough --diseases DiseaseAndSymptoms.csv --precautions precautions.csv
//!
//! # JSON output for scripting
//! symptom-match predict cough high_fever --format json
//!
//! # Start the API
//! symptom-match serve --port 8080 --open
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::dataset::store::{Dataset, DatasetError};

pub mod dataset;
pub mod predict;

#[derive(Parser)]
#[command(name = "symptom-match")]
#[command(version)]
#[command(about = "Match reported symptoms to a disease and its recommended precautions")]
#[command(
    long_about = "symptom-match scores a selection of one or two symptoms against every disease in a reference dataset.\n\nThe disease listing the most selected symptoms wins (the earliest row wins ties), and its recommended precautions are shown with it.\nA sample dataset is built in; use --diseases and --precautions to load your own CSV tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict the disease for a symptom selection
    Predict(predict::PredictArgs),

    /// List all known symptoms
    Symptoms(DatasetArgs),

    /// Show dataset statistics
    Stats(dataset::StatsArgs),

    /// Show the precautions for a disease
    Precautions(dataset::PrecautionsArgs),

    /// Export the dataset as JSON
    Export(dataset::ExportArgs),

    /// Start the web server
    Serve(ServeArgs),
}

/// Where to load the dataset tables from
#[derive(clap::Args, Clone, Debug, Default)]
pub struct DatasetArgs {
    /// Disease table CSV (Disease + Symptom columns); defaults to the built-in dataset
    #[arg(long)]
    pub diseases: Option<PathBuf>,

    /// Precaution table CSV (Disease + Precaution_1..4); defaults to the built-in dataset
    #[arg(long)]
    pub precautions: Option<PathBuf>,
}

impl DatasetArgs {
    /// Load the dataset these arguments describe
    ///
    /// # Errors
    ///
    /// Returns an error if a table cannot be read or is malformed.
    pub fn load(&self) -> Result<Dataset, DatasetError> {
        Dataset::load(self.diseases.as_deref(), self.precautions.as_deref())
    }
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
