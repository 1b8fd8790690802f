use crate::core::precaution::PrecautionRecord;

/// Precautions of the first record named exactly `disease`.
///
/// Returns an empty slice when no record matches; that is an ordinary outcome.
#[must_use]
pub fn precautions_for<'a>(disease: &str, table: &'a [PrecautionRecord]) -> &'a [String] {
    table
        .iter()
        .find(|record| record.disease == disease)
        .map(|record| record.precautions.as_slice())
        .unwrap_or_default()
}
