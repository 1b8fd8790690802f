//! Centralized validation and helper functions.

use crate::core::types::SymptomSelection;

/// Maximum number of rows allowed in a single dataset table (DOS protection)
pub const MAX_RECORDS: usize = 1_000_000;

/// Maximum number of symptoms a caller may submit in one selection
pub const MAX_SELECTED_SYMPTOMS: usize = 2;

/// Check if adding another record would exceed `limit` (normally [`MAX_RECORDS`]).
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_record_limit(records.len(), MAX_RECORDS).is_some() {
///     return Err(...);
/// }
/// records.push(new_record); // Safe to add
/// ```
#[must_use]
pub fn check_record_limit(count: usize, limit: usize) -> Option<String> {
    if count >= limit {
        Some(format!(
            "Too many records: adding another would exceed maximum of {limit}"
        ))
    } else {
        None
    }
}

/// Rejected symptom selection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Please select at least one symptom")]
    Empty,
    #[error("Too many symptoms selected: {0} (maximum {MAX_SELECTED_SYMPTOMS})")]
    TooMany(usize),
    #[error("Unknown symptom: '{0}'")]
    UnknownSymptom(String),
}

/// Validate symptoms submitted by a user before they reach the matcher.
///
/// Each entry is trimmed and blank entries are ignored. The remaining distinct
/// symptoms must number between 1 and [`MAX_SELECTED_SYMPTOMS`] and each must
/// appear in `universe`, which must be sorted.
///
/// # Errors
///
/// Returns `SelectionError::Empty` if nothing was selected,
/// `SelectionError::TooMany` if more than the allowed number of distinct symptoms
/// were selected, or `SelectionError::UnknownSymptom` for the first symptom
/// not in the universe.
pub fn validate_selection<S: AsRef<str>>(
    raw: &[S],
    universe: &[String],
) -> Result<SymptomSelection, SelectionError> {
    let selection: SymptomSelection = raw
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();

    if selection.is_empty() {
        return Err(SelectionError::Empty);
    }
    if selection.len() > MAX_SELECTED_SYMPTOMS {
        return Err(SelectionError::TooMany(selection.len()));
    }

    if let Some(unknown) = selection
        .iter()
        .find(|s| universe.binary_search_by(|u| u.as_str().cmp(*s)).is_err())
    {
        return Err(SelectionError::UnknownSymptom(unknown.to_string()));
    }

    Ok(selection)
}
