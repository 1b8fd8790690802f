use std::io::Read;
use std::path::Path;

use crate::core::disease::DiseaseRecord;
use crate::parsing::table::{cell, open_file, LoadError, Table};

/// Substring marking a column as a symptom slot
pub const SYMPTOM_COLUMN_MARKER: &str = "Symptom";

/// Load the disease table from a CSV file (optionally gzipped)
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or other load errors
/// if the content is invalid.
pub fn load_diseases_file(path: &Path) -> Result<Vec<DiseaseRecord>, LoadError> {
    let records = load_diseases(open_file(path)?)?;
    tracing::debug!(
        "Loaded {} disease rows from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Load the disease table: a `Disease` column plus any number of columns
/// whose name contains `Symptom`, read left to right.
///
/// # Errors
///
/// Returns `LoadError::MissingColumn` if there is no `Disease` column,
/// `LoadError::MissingValue` if a row has no disease name, or
/// `LoadError::Csv` for malformed CSV.
pub fn load_diseases<R: Read>(source: R) -> Result<Vec<DiseaseRecord>, LoadError> {
    let table = Table::from_reader(source)?;
    let symptom_columns = table.columns_where(|name| name.contains(SYMPTOM_COLUMN_MARKER));

    if symptom_columns.is_empty() {
        tracing::warn!("Disease table has no symptom columns; every score will be 0");
    }

    table.rows(|disease, record| {
        DiseaseRecord::new(
            disease,
            symptom_columns.iter().map(|&i| cell(record, i)),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_diseases() {
        let csv = "Disease,Symptom_1,Symptom_2,Symptom_3
Flu, fever,cough ,fatigue
Cold,cough,sneezing,
";
        let records = load_diseases(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].disease, "Flu");
        assert_eq!(records[0].symptoms, vec!["fever", "cough", "fatigue"]);
        assert_eq!(records[1].symptoms, vec!["cough", "sneezing"]);
    }

    #[test]
    fn test_symptom_columns_by_substring_in_column_order() {
        let csv = "Symptom_B,Disease,Notes,Other Symptom,symptom_lower
b,Flu,ignored,other,lower
";
        let records = load_diseases(csv.as_bytes()).unwrap();
        assert_eq!(records[0].symptoms, vec!["b", "other"]);
    }

    #[test]
    fn test_ragged_rows() {
        let csv = "Disease,Symptom_1,Symptom_2,Symptom_3\nFlu,fever\n";
        let records = load_diseases(csv.as_bytes()).unwrap();
        assert_eq!(records[0].symptoms, vec!["fever"]);
    }

    #[test]
    fn test_duplicate_diseases_kept() {
        let csv = "Disease,Symptom_1\nFlu,fever\nFlu,cough\n";
        let records = load_diseases(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let csv = "Disease,Symptom_1\n";
        let records = load_diseases(csv.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_disease_column() {
        let csv = "Illness,Symptom_1\nFlu,fever\n";
        assert!(matches!(
            load_diseases(csv.as_bytes()),
            Err(LoadError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_load_diseases_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diseases.csv");
        std::fs::write(&path, "Disease,Symptom_1\nFlu,fever\n").unwrap();

        let records = load_diseases_file(&path).unwrap();
        assert_eq!(records[0].symptoms, vec!["fever"]);
    }
}
