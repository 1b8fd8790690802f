use std::collections::{BTreeSet, HashMap, HashSet};

use crate::core::disease::DiseaseRecord;
use crate::core::precaution::PrecautionRecord;

/// Every distinct symptom named by any disease record, sorted ascending.
///
/// Records are already trimmed and free of blanks, so the result is too.
#[must_use]
pub fn symptom_universe(diseases: &[DiseaseRecord]) -> Vec<String> {
    diseases
        .iter()
        .flat_map(|record| record.symptoms.iter())
        .map(String::as_str)
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Row position of the first precaution record for each disease name.
///
/// Later rows with the same name never replace an earlier one.
#[must_use]
pub fn precaution_index(precautions: &[PrecautionRecord]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(precautions.len());
    for (i, record) in precautions.iter().enumerate() {
        index.entry(record.disease.clone()).or_insert(i);
    }
    index
}

/// Disease names with more than one precaution row, in order of first appearance
#[must_use]
pub fn duplicate_precaution_diseases(precautions: &[PrecautionRecord]) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(precautions.len());
    let mut duplicates: Vec<&str> = Vec::new();

    for record in precautions {
        let disease = record.disease.as_str();
        if !seen.insert(disease) && !duplicates.contains(&disease) {
            duplicates.push(disease);
        }
    }

    duplicates
}
