//! Symptom matching engine.
//!
//! This module provides the core matching functionality:
//!
//! - [`score`]: Overlap between a symptom selection and one disease record
//! - [`best_match`]: The single best-scoring disease record
//! - [`precautions_for`]: Precautions recommended for a disease
//! - [`MatchingEngine`]: Composes the above into a [`Prediction`]
//!
//! ## Matching Algorithm
//!
//! 1. **Scoring**: Each disease record scores the number of selected symptoms it
//!    lists. Set semantics and exact names only; no case folding or fuzzy matching.
//! 2. **Selection**: Records are visited in source order and the best is replaced
//!    only on a strictly higher score. Equal top scores go to the earliest record,
//!    and the score is not normalized by how many symptoms a record lists.
//! 3. **Precautions**: The first precaution row with exactly the winning disease
//!    name supplies the precautions. No row means no precautions, not an error.
//!
//! Scoring is O(records × slots) per query. An inverted index from symptom to
//! records would be the next step for much larger tables.
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_match::{Dataset, MatchingEngine, SymptomSelection};
//!
//! let dataset = Dataset::load_embedded().unwrap();
//! let engine = MatchingEngine::new(&dataset);
//!
//! let selection: SymptomSelection = ["cough", "high_fever"].into_iter().collect();
//! if let Some(prediction) = engine.predict(&selection) {
//!     println!("{} (score {})", prediction.disease, prediction.score);
//!     for precaution in &prediction.precautions {
//!         println!("- {precaution}");
//!     }
//! }
//! ```
//!
//! [`score`]: scoring::score
//! [`best_match`]: engine::best_match
//! [`precautions_for`]: precautions::precautions_for
//! [`MatchingEngine`]: engine::MatchingEngine
//! [`Prediction`]: crate::core::types::Prediction

pub mod engine;
pub mod precautions;
pub mod scoring;
