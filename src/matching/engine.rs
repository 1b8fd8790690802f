use crate::core::disease::DiseaseRecord;
use crate::core::types::{DatasetSummary, Prediction, SymptomSelection};
use crate::dataset::store::Dataset;
use crate::matching::scoring::{matched_symptoms, score};

/// The best-scoring disease record and its score.
///
/// A single pass in source order; a candidate replaces the current best only when
/// its score is strictly higher, so among equal top scores the earliest record
/// wins. With at least one record a winner is always returned, even if every
/// score is 0. Returns `None` only for an empty table.
#[must_use]
pub fn best_match<'a>(
    user: &SymptomSelection,
    diseases: &'a [DiseaseRecord],
) -> Option<(&'a DiseaseRecord, usize)> {
    diseases
        .iter()
        .fold(None::<(&'a DiseaseRecord, usize)>, |best, candidate| {
            let candidate_score = score(user, candidate);
            match best {
                Some((_, best_score)) if candidate_score <= best_score => best,
                _ => Some((candidate, candidate_score)),
            }
        })
}

/// Name of the best-matching disease, see [`best_match`]
#[must_use]
pub fn best_match_name<'a>(
    user: &SymptomSelection,
    diseases: &'a [DiseaseRecord],
) -> Option<&'a str> {
    best_match(user, diseases).map(|(record, _)| record.disease.as_str())
}

/// Answers symptom queries against a loaded dataset
pub struct MatchingEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Sorted distinct symptoms, for populating a symptom picker
    pub fn symptom_universe(&self) -> &'a [String] {
        self.dataset.symptom_universe()
    }

    /// Predict the disease for a selection and attach its precautions.
    ///
    /// Returns `None` when the disease table is empty. Callers are expected to
    /// reject empty selections before calling this.
    pub fn predict(&self, user: &SymptomSelection) -> Option<Prediction> {
        let Some((record, best_score)) = best_match(user, self.dataset.diseases()) else {
            tracing::debug!("No disease records; no prediction for [{user}]");
            return None;
        };

        tracing::debug!(
            "Best match for [{user}]: '{}' with score {best_score}",
            record.disease
        );

        Some(Prediction {
            disease: record.disease.clone(),
            score: best_score,
            matched_symptoms: matched_symptoms(user, record),
            precautions: self.dataset.precautions_for(&record.disease).to_vec(),
        })
    }

    /// Aggregate counters for display
    pub fn summary(&self) -> DatasetSummary {
        self.dataset.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::precaution::PrecautionRecord;

    fn flu_and_cold() -> Vec<DiseaseRecord> {
        vec![
            DiseaseRecord::new("Flu", ["fever", "cough", "fatigue"]),
            DiseaseRecord::new("Cold", ["cough", "sneezing"]),
        ]
    }

    fn selection(symptoms: &[&str]) -> SymptomSelection {
        symptoms.iter().copied().collect()
    }

    #[test]
    fn test_best_match_highest_score() {
        let diseases = flu_and_cold();
        let (record, best_score) =
            best_match(&selection(&["cough", "fatigue"]), &diseases).unwrap();
        assert_eq!(record.disease, "Flu");
        assert_eq!(best_score, 2);
    }

    #[test]
    fn test_best_match_later_record_wins_on_strict_improvement() {
        let diseases = flu_and_cold();
        assert_eq!(
            best_match_name(&selection(&["sneezing"]), &diseases),
            Some("Cold")
        );
    }

    #[test]
    fn test_best_match_all_zero_first_wins() {
        let diseases = flu_and_cold();
        let (record, best_score) = best_match(&selection(&["headache"]), &diseases).unwrap();
        assert_eq!(record.disease, "Flu");
        assert_eq!(best_score, 0);
    }

    #[test]
    fn test_best_match_tie_first_in_source_order() {
        let diseases = vec![
            DiseaseRecord::new("Zeta", ["cough", "fever"]),
            DiseaseRecord::new("Alpha", ["fever", "cough"]),
        ];
        for user in [
            selection(&["cough"]),
            selection(&["fever"]),
            selection(&["cough", "fever"]),
            selection(&["rash"]),
        ] {
            assert_eq!(best_match_name(&user, &diseases), Some("Zeta"));
        }
    }

    #[test]
    fn test_best_match_not_normalized_by_size() {
        let mut big: Vec<String> = (0..18).map(|i| format!("symptom_{i}")).collect();
        big.push("cough".to_string());
        big.push("fever".to_string());
        let diseases = vec![
            DiseaseRecord::new("Broad", big),
            DiseaseRecord::new("Narrow", ["cough", "fever"]),
        ];
        assert_eq!(
            best_match_name(&selection(&["cough", "fever"]), &diseases),
            Some("Broad")
        );
    }

    #[test]
    fn test_best_match_empty_table() {
        assert!(best_match(&selection(&["cough"]), &[]).is_none());
        assert!(best_match_name(&SymptomSelection::new(), &[]).is_none());
    }

    #[test]
    fn test_best_match_returns_name_from_dataset() {
        let diseases = flu_and_cold();
        for user in [
            selection(&["fever"]),
            selection(&["sneezing", "cough"]),
            selection(&["nothing"]),
            SymptomSelection::new(),
        ] {
            let name = best_match_name(&user, &diseases).unwrap();
            assert!(diseases.iter().any(|d| d.disease == name));
        }
    }

    #[test]
    fn test_predict_with_precautions() {
        let dataset = Dataset::from_records(
            flu_and_cold(),
            vec![PrecautionRecord::new("Flu", ["Drink fluids", "", "Rest", ""])],
        );
        let engine = MatchingEngine::new(&dataset);

        let prediction = engine.predict(&selection(&["cough", "fatigue"])).unwrap();
        assert_eq!(prediction.disease, "Flu");
        assert_eq!(prediction.score, 2);
        assert_eq!(prediction.matched_symptoms, vec!["cough", "fatigue"]);
        assert_eq!(prediction.precautions, vec!["Drink fluids", "Rest"]);
    }

    #[test]
    fn test_predict_duplicate_precaution_rows_use_first() {
        let dataset = Dataset::from_records(
            flu_and_cold(),
            vec![
                PrecautionRecord::new("Cold", ["tea"]),
                PrecautionRecord::new("Flu", ["Drink fluids", "Rest"]),
                PrecautionRecord::new("Flu", ["ignored"]),
            ],
        );
        let engine = MatchingEngine::new(&dataset);

        let prediction = engine.predict(&selection(&["fever"])).unwrap();
        assert_eq!(prediction.disease, "Flu");
        assert_eq!(prediction.precautions, vec!["Drink fluids", "Rest"]);
    }

    #[test]
    fn test_predict_without_precautions() {
        let dataset = Dataset::from_records(flu_and_cold(), Vec::new());
        let engine = MatchingEngine::new(&dataset);

        let prediction = engine.predict(&selection(&["cough", "fatigue"])).unwrap();
        assert_eq!(prediction.disease, "Flu");
        assert!(prediction.precautions.is_empty());
    }

    #[test]
    fn test_predict_empty_dataset() {
        let dataset = Dataset::default();
        let engine = MatchingEngine::new(&dataset);
        assert!(engine.predict(&selection(&["cough"])).is_none());
    }

    #[test]
    fn test_predict_embedded() {
        let dataset = Dataset::load_embedded().unwrap();
        let engine = MatchingEngine::new(&dataset);

        let prediction = engine
            .predict(&selection(&["burning_micturition", "bladder_discomfort"]))
            .unwrap();
        assert_eq!(prediction.disease, "Urinary tract infection");
        assert_eq!(prediction.score, 2);
        assert_eq!(prediction.precautions.len(), 4);
    }

    #[test]
    fn test_engine_universe_and_summary() {
        let dataset = Dataset::from_records(flu_and_cold(), Vec::new());
        let engine = MatchingEngine::new(&dataset);
        assert_eq!(
            engine.symptom_universe(),
            ["cough", "fatigue", "fever", "sneezing"]
        );
        assert_eq!(engine.summary().disease_count, 2);
        assert_eq!(engine.summary().precaution_record_count, 0);
    }
}
