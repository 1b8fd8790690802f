use serde::Serialize;
use std::collections::HashSet;

/// A disease and the symptoms listed for it in one row of the disease table
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseRecord {
    /// Disease name, exactly as written in the source table
    pub disease: String,

    /// Non-empty, trimmed symptom names in slot order.
    /// Duplicates across slots are kept as given.
    pub symptoms: Vec<String>,

    // === Pre-computed for matching ===
    /// Distinct symptoms of this record
    #[serde(skip)]
    pub symptom_set: HashSet<String>,
}

impl DiseaseRecord {
    /// Build a record from raw slot values.
    ///
    /// Each slot is trimmed; slots that are empty or whitespace-only are dropped.
    #[must_use]
    pub fn new<I, S>(disease: impl Into<String>, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symptoms: Vec<String> = slots
            .into_iter()
            .filter_map(|slot| {
                let trimmed = slot.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();

        let mut record = Self {
            disease: disease.into(),
            symptoms,
            symptom_set: HashSet::new(),
        };
        record.rebuild_indexes();
        record
    }

    pub fn rebuild_indexes(&mut self) {
        self.symptom_set = self.symptoms.iter().cloned().collect();
    }

    /// Check whether this record lists the given symptom (exact match)
    #[must_use]
    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptom_set.contains(symptom)
    }
}
