//! Descriptive statistics over a loaded dataset.

use std::collections::{HashMap, HashSet};

use crate::core::disease::DiseaseRecord;
use crate::core::types::Frequency;

/// Number of distinct disease names
#[must_use]
pub fn distinct_disease_count(diseases: &[DiseaseRecord]) -> usize {
    diseases
        .iter()
        .map(|record| record.disease.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Rows per disease name, most frequent first
#[must_use]
pub fn disease_frequencies(diseases: &[DiseaseRecord], top: usize) -> Vec<Frequency> {
    rank(
        diseases.iter().map(|record| record.disease.as_str()),
        top,
    )
}

/// Occurrences of each symptom across every slot of every row, most frequent first.
/// A symptom repeated within one row counts each time.
#[must_use]
pub fn symptom_frequencies(diseases: &[DiseaseRecord], top: usize) -> Vec<Frequency> {
    rank(
        diseases
            .iter()
            .flat_map(|record| record.symptoms.iter().map(String::as_str)),
        top,
    )
}

/// Count names, sort by count descending then name ascending, keep `top`
fn rank<'a>(names: impl Iterator<Item = &'a str>, top: usize) -> Vec<Frequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in names {
        *counts.entry(name).or_default() += 1;
    }

    let mut ranked: Vec<Frequency> = counts
        .into_iter()
        .map(|(name, count)| Frequency {
            name: name.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(top);
    ranked
}
