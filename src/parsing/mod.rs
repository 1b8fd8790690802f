//! Loaders for the two dataset tables.
//!
//! This module provides parsers for:
//!
//! - **Disease table**: `Disease` plus symptom slot columns (any column whose name
//!   contains `Symptom`)
//! - **Precaution table**: `Disease` plus `Precaution_1` to `Precaution_4`
//!
//! Both are comma-separated text with a header row. Files ending in `.gz` or `.bgz`
//! are decompressed transparently.
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_match::parsing::diseases::load_diseases_file;
//! use symptom_match::parsing::precautions::load_precautions;
//! use std::path::Path;
//!
//! let diseases = load_diseases_file(Path::new("DiseaseAndSymptoms.csv")).unwrap();
//!
//! let csv = "Disease,Precaution_1,Precaution_2\nFlu,Drink fluids,Rest\n";
//! let precautions = load_precautions(csv.as_bytes()).unwrap();
//! ```
//!
//! ## Normalization
//!
//! | Cell | Treatment |
//! |------|-----------|
//! | Symptom / precaution | Trimmed; blank or absent cells dropped |
//! | Disease | Kept as written; blank or absent is a load error |

pub mod diseases;
pub mod precautions;
pub mod table;
