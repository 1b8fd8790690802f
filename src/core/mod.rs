//! Core data types for symptom matching.
//!
//! - [`DiseaseRecord`]: A disease and the symptoms listed for it in one table row
//! - [`PrecautionRecord`]: Ordered precautions recommended for a disease
//! - [`SymptomSelection`]: The set of symptoms a patient reported
//! - [`Prediction`], [`DatasetSummary`], [`Frequency`]: Result and display types
//!
//! ## Symptom Names
//!
//! Symptom names are compared **exactly** after trimming surrounding whitespace.
//! `skin_rash`, `Skin_rash` and `skin rash` are three different symptoms.
//!
//! [`DiseaseRecord`]: disease::DiseaseRecord
//! [`PrecautionRecord`]: precaution::PrecautionRecord
//! [`SymptomSelection`]: types::SymptomSelection
//! [`Prediction`]: types::Prediction
//! [`DatasetSummary`]: types::DatasetSummary
//! [`Frequency`]: types::Frequency

pub mod disease;
pub mod precaution;
pub mod types;
