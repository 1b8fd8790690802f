use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::disease::DiseaseRecord;
use crate::core::precaution::PrecautionRecord;
use crate::core::types::{DatasetSummary, Frequency};
use crate::dataset::{index, stats};
use crate::parsing::diseases::{load_diseases, load_diseases_file};
use crate::parsing::precautions::{load_precautions, load_precautions_file};
use crate::parsing::table::LoadError;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to load disease table: {0}")]
    Diseases(#[source] LoadError),

    #[error("Failed to load precaution table: {0}")]
    Precautions(#[source] LoadError),

    #[error("Failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),
}

// Embedded at compile time; validated by build.rs
const EMBEDDED_DISEASES: &str = include_str!("../../data/DiseaseAndSymptoms.csv");
const EMBEDDED_PRECAUTIONS: &str = include_str!("../../data/disease_precaution.csv");

/// Export format version
pub const EXPORT_VERSION: &str = "1.0.0";

/// Serializable export format
#[derive(Debug, Serialize)]
struct DatasetExport<'a> {
    version: &'a str,
    created_at: String,
    diseases: &'a [DiseaseRecord],
    precautions: &'a [PrecautionRecord],
}

/// The loaded reference dataset with its indexes.
///
/// Built once and read-only afterwards, so it can be shared between any
/// number of concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Disease rows in source order
    diseases: Vec<DiseaseRecord>,

    /// Precaution rows in source order
    precautions: Vec<PrecautionRecord>,

    /// Sorted distinct symptoms across all disease rows
    symptom_universe: Vec<String>,

    /// Disease name -> position of its first precaution row
    precaution_index: HashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset from already-loaded tables
    #[must_use]
    pub fn from_records(diseases: Vec<DiseaseRecord>, precautions: Vec<PrecautionRecord>) -> Self {
        let symptom_universe = index::symptom_universe(&diseases);
        let precaution_index = index::precaution_index(&precautions);

        for disease in index::duplicate_precaution_diseases(&precautions) {
            tracing::warn!("Multiple precaution rows for '{disease}'; using the first one");
        }

        Self {
            diseases,
            precautions,
            symptom_universe,
            precaution_index,
        }
    }

    /// Load the embedded sample dataset
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded table is malformed.
    pub fn load_embedded() -> Result<Self, DatasetError> {
        Self::load(None, None)
    }

    /// Load the dataset from files, using the embedded table for any path not given
    ///
    /// # Errors
    ///
    /// Returns an error if a table cannot be read or is malformed. Nothing is
    /// returned on failure; there is no partially loaded dataset.
    pub fn load(
        diseases_path: Option<&Path>,
        precautions_path: Option<&Path>,
    ) -> Result<Self, DatasetError> {
        let diseases = match diseases_path {
            Some(path) => load_diseases_file(path),
            None => load_diseases(EMBEDDED_DISEASES.as_bytes()),
        }
        .map_err(DatasetError::Diseases)?;

        let precautions = match precautions_path {
            Some(path) => load_precautions_file(path),
            None => load_precautions(EMBEDDED_PRECAUTIONS.as_bytes()),
        }
        .map_err(DatasetError::Precautions)?;

        let dataset = Self::from_records(diseases, precautions);
        tracing::info!("Loaded dataset: {}", dataset.describe());
        Ok(dataset)
    }

    /// Load both tables from files
    ///
    /// # Errors
    ///
    /// Returns an error if a table cannot be read or is malformed.
    pub fn load_from_files(diseases: &Path, precautions: &Path) -> Result<Self, DatasetError> {
        Self::load(Some(diseases), Some(precautions))
    }

    /// Disease rows in source order
    pub fn diseases(&self) -> &[DiseaseRecord] {
        &self.diseases
    }

    /// Precaution rows in source order
    pub fn precautions(&self) -> &[PrecautionRecord] {
        &self.precautions
    }

    /// Sorted distinct symptoms, for populating a symptom picker
    pub fn symptom_universe(&self) -> &[String] {
        &self.symptom_universe
    }

    /// Precautions for a disease (exact name match, first row wins).
    /// Empty when the precaution table has no row for it.
    pub fn precautions_for(&self, disease: &str) -> &[String] {
        self.precaution_index
            .get(disease)
            .and_then(|&i| self.precautions.get(i))
            .map(|record| record.precautions.as_slice())
            .unwrap_or_default()
    }

    /// Aggregate counters for display
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            disease_count: stats::distinct_disease_count(&self.diseases),
            symptom_count: self.symptom_universe.len(),
            precaution_record_count: self.precautions.len(),
        }
    }

    /// Rows per disease name, most frequent first
    pub fn disease_frequencies(&self, top: usize) -> Vec<Frequency> {
        stats::disease_frequencies(&self.diseases, top)
    }

    /// Occurrences per symptom, most frequent first
    pub fn symptom_frequencies(&self, top: usize) -> Vec<Frequency> {
        stats::symptom_frequencies(&self.diseases, top)
    }

    /// Export the dataset to JSON
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Serialize` if serialization fails.
    pub fn to_json(&self) -> Result<String, DatasetError> {
        let data = DatasetExport {
            version: EXPORT_VERSION,
            created_at: chrono::Utc::now().to_rfc3339(),
            diseases: &self.diseases,
            precautions: &self.precautions,
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of disease rows
    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    /// Check if the disease table is empty
    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    fn describe(&self) -> String {
        let summary = self.summary();
        format!(
            "{} disease rows ({} distinct), {} symptoms, {} precaution rows",
            self.diseases.len(),
            summary.disease_count,
            summary.symptom_count,
            summary.precaution_record_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dataset() -> Dataset {
        Dataset::from_records(
            vec![
                DiseaseRecord::new("Flu", ["fever", "cough", "fatigue"]),
                DiseaseRecord::new("Cold", ["cough", "sneezing"]),
            ],
            vec![
                PrecautionRecord::new("Cold", ["Drink fluids", "", "Rest", ""]),
                PrecautionRecord::new("Cold", ["ignored"]),
            ],
        )
    }

    #[test]
    fn test_load_embedded_dataset() {
        let dataset = Dataset::load_embedded().unwrap();
        assert!(!dataset.is_empty());
        assert!(!dataset.symptom_universe().is_empty());
        assert!(!dataset.precautions().is_empty());
    }

    #[test]
    fn test_embedded_blank_precaution_slot_dropped() {
        let dataset = Dataset::load_embedded().unwrap();
        assert_eq!(
            dataset.precautions_for("Allergy"),
            ["apply calamine", "cover area with bandage", "use ice to compress itching"]
        );
    }

    #[test]
    fn test_embedded_disease_names_match_precautions_exactly() {
        let dataset = Dataset::load_embedded().unwrap();
        // Trailing space is part of the name in both tables
        assert!(!dataset.precautions_for("Diabetes ").is_empty());
        assert!(dataset.precautions_for("Diabetes").is_empty());
    }

    #[test]
    fn test_precautions_for() {
        let dataset = small_dataset();
        assert_eq!(dataset.precautions_for("Cold"), ["Drink fluids", "Rest"]);
        assert!(dataset.precautions_for("Flu").is_empty());
        assert!(dataset.precautions_for("cold").is_empty());
    }

    #[test]
    fn test_precautions_for_agrees_with_table_scan() {
        let dataset = Dataset::from_records(
            Vec::new(),
            vec![
                PrecautionRecord::new("Flu", ["rest"]),
                PrecautionRecord::new("Cold", ["tea"]),
                PrecautionRecord::new("Flu", ["fluids"]),
                PrecautionRecord::new("Flu ", ["sleep"]),
            ],
        );
        for disease in ["Flu", "Cold", "Flu ", "flu", "Measles"] {
            assert_eq!(
                dataset.precautions_for(disease),
                crate::matching::precautions::precautions_for(disease, dataset.precautions()),
                "disease: {disease:?}"
            );
        }
        assert_eq!(dataset.precautions_for("Flu"), ["rest"]);
    }

    #[test]
    fn test_dataset_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dataset>();
    }

    #[test]
    fn test_summary() {
        let summary = small_dataset().summary();
        assert_eq!(summary.disease_count, 2);
        assert_eq!(summary.symptom_count, 4);
        assert_eq!(summary.precaution_record_count, 2);
    }

    #[test]
    fn test_load_overrides_one_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diseases.csv");
        std::fs::write(&path, "Disease,Symptom_1\nFlu,fever\n").unwrap();

        let dataset = Dataset::load(Some(&path), None).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.symptom_universe(), ["fever"]);
        // Precautions still come from the embedded table
        assert!(!dataset.precautions().is_empty());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Dataset::load_from_files(
            Path::new("/nonexistent/diseases.csv"),
            Path::new("/nonexistent/precautions.csv"),
        );
        assert!(matches!(result, Err(DatasetError::Diseases(LoadError::Io(_)))));
    }

    #[test]
    fn test_load_bad_precautions_fails() {
        let dir = tempfile::tempdir().unwrap();
        let diseases = dir.path().join("diseases.csv");
        let precautions = dir.path().join("precautions.csv");
        std::fs::write(&diseases, "Disease,Symptom_1\nFlu,fever\n").unwrap();
        std::fs::write(&precautions, "Name,Precaution_1\nFlu,rest\n").unwrap();

        let result = Dataset::load_from_files(&diseases, &precautions);
        assert!(matches!(
            result,
            Err(DatasetError::Precautions(LoadError::MissingColumn(_)))
        ));
    }

    #[test]
    fn test_to_json() {
        let json = small_dataset().to_json().unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"diseases\""));
        assert!(json.contains("sneezing"));
        assert!(!json.contains("symptom_set"));
    }
}
