//! # symptom-match
//!
//! A library for matching reported symptoms to the best-fitting disease in a
//! reference dataset and looking up the precautions recommended for it.
//!
//! The dataset is two tables: diseases with their symptom slots, and diseases with
//! up to four precaution slots. A symptom selection is scored against every disease
//! row by exact overlap, the highest score wins (earliest row on ties), and the
//! winner's precautions are returned alongside it.
//!
//! ## Features
//!
//! - **Deterministic matching**: Exact symptom overlap with a fixed tie-break
//! - **CSV loading**: Header-driven column detection, ragged rows, gzip input
//! - **Embedded dataset**: A sample dataset compiled into the binary
//! - **Statistics**: Disease and symptom frequency tables
//! - **Interfaces**: Command line and JSON HTTP API
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_match::{Dataset, MatchingEngine, SymptomSelection};
//!
//! let dataset = Dataset::load_embedded().unwrap();
//! let engine = MatchingEngine::new(&dataset);
//!
//! let selection: SymptomSelection = ["itching", "skin_rash"].into_iter().collect();
//! let prediction = engine.predict(&selection).unwrap();
//! println!("{}: {:?}", prediction.disease, prediction.precautions);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Record, selection, and result types
//! - [`parsing`]: Loaders for the disease and precaution tables
//! - [`dataset`]: The loaded dataset, its symptom index, and statistics
//! - [`matching`]: Scoring, selection, and precaution lookup
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON HTTP API

pub mod cli;
pub mod core;
pub mod dataset;
pub mod matching;
pub mod parsing;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::disease::DiseaseRecord;
pub use crate::core::precaution::PrecautionRecord;
pub use crate::core::types::*;
pub use dataset::store::{Dataset, DatasetError};
pub use matching::engine::{best_match, MatchingEngine};
pub use parsing::table::LoadError;
