use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of symptoms a patient reported.
///
/// Built from any sequence of names; duplicates collapse and order is forgotten,
/// so two selections with the same members are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomSelection(BTreeSet<String>);

impl SymptomSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, symptom: &str) -> bool {
        self.0.contains(symptom)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SymptomSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Display for SymptomSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Outcome of a successful prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// Name of the best-matching disease
    pub disease: String,

    /// Number of selected symptoms the disease lists
    pub score: usize,

    /// Selected symptoms the disease lists, sorted
    pub matched_symptoms: Vec<String>,

    /// Recommended precautions; empty when the precaution table has none
    pub precautions: Vec<String>,
}

/// Aggregate counters over a loaded dataset, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Distinct disease names in the disease table
    pub disease_count: usize,
    /// Distinct symptoms across all disease rows
    pub symptom_count: usize,
    /// Rows in the precaution table
    pub precaution_record_count: usize,
}

/// A name with how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frequency {
    pub name: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_ignores_order_and_duplicates() {
        let a: SymptomSelection = ["cough", "fatigue"].into_iter().collect();
        let b: SymptomSelection = ["fatigue", "cough", "cough"].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_selection_display() {
        let selection: SymptomSelection = ["fever", "cough"].into_iter().collect();
        assert_eq!(selection.to_string(), "cough, fever");
    }
}
