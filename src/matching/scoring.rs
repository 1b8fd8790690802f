use crate::core::disease::DiseaseRecord;
use crate::core::types::SymptomSelection;

/// Overlap score: how many selected symptoms the candidate lists.
///
/// Set semantics on both sides. A symptom repeated across the candidate's slots
/// counts once, and an empty selection scores 0. Names must match exactly.
#[must_use]
pub fn score(user: &SymptomSelection, candidate: &DiseaseRecord) -> usize {
    user.iter()
        .filter(|symptom| candidate.has_symptom(symptom))
        .count()
}

/// Selected symptoms the candidate lists, sorted
#[must_use]
pub fn matched_symptoms(user: &SymptomSelection, candidate: &DiseaseRecord) -> Vec<String> {
    user.iter()
        .filter(|symptom| candidate.has_symptom(symptom))
        .map(str::to_string)
        .collect()
}
