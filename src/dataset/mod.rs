//! The reference dataset: disease and precaution tables plus derived indexes.
//!
//! A small sample dataset is compiled into the binary (validated by `build.rs`).
//! Either table can be replaced with a CSV file at startup.
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_match::Dataset;
//! use std::path::Path;
//!
//! // Load the embedded dataset
//! let dataset = Dataset::load_embedded().unwrap();
//!
//! // Symptoms for a picker
//! for symptom in dataset.symptom_universe() {
//!     println!("{symptom}");
//! }
//!
//! // Load from files
//! let custom = Dataset::load_from_files(
//!     Path::new("DiseaseAndSymptoms.csv"),
//!     Path::new("Disease precaution.csv"),
//! )
//! .unwrap();
//! ```

pub mod index;
pub mod stats;
pub mod store;
