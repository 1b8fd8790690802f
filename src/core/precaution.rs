use serde::Serialize;

/// Number of precaution slots in the precaution table
pub const PRECAUTION_SLOTS: usize = 4;

/// Recommended precautions for one disease, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrecautionRecord {
    pub disease: String,

    /// Non-empty, trimmed precautions; slot 1 first
    pub precautions: Vec<String>,
}

impl PrecautionRecord {
    /// Build a record from raw slot values, dropping blank slots.
    #[must_use]
    pub fn new<I, S>(disease: impl Into<String>, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let precautions = slots
            .into_iter()
            .filter_map(|slot| {
                let trimmed = slot.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();

        Self {
            disease: disease.into(),
            precautions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_slots_dropped_order_preserved() {
        let record = PrecautionRecord::new("Flu", ["Drink fluids", "", "Rest", ""]);
        assert_eq!(record.precautions, vec!["Drink fluids", "Rest"]);
    }

    #[test]
    fn test_all_blank() {
        let record = PrecautionRecord::new("Flu", ["", " ", "\t", ""]);
        assert!(record.precautions.is_empty());
    }
}
