use std::io::Read;
use std::path::Path;

use crate::core::precaution::{PrecautionRecord, PRECAUTION_SLOTS};
use crate::parsing::table::{cell, open_file, LoadError, Table};

/// Load the precaution table from a CSV file (optionally gzipped)
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or other load errors
/// if the content is invalid.
pub fn load_precautions_file(path: &Path) -> Result<Vec<PrecautionRecord>, LoadError> {
    let records = load_precautions(open_file(path)?)?;
    tracing::debug!(
        "Loaded {} precaution rows from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Load the precaution table: a `Disease` column plus `Precaution_1` to
/// `Precaution_4`. Slots are read in slot order whatever their column
/// position; a missing slot column is treated as empty.
///
/// # Errors
///
/// Returns `LoadError::MissingColumn` if there is no `Disease` column,
/// `LoadError::MissingValue` if a row has no disease name, or
/// `LoadError::Csv` for malformed CSV.
pub fn load_precautions<R: Read>(source: R) -> Result<Vec<PrecautionRecord>, LoadError> {
    let table = Table::from_reader(source)?;
    let slot_columns: Vec<usize> = (1..=PRECAUTION_SLOTS)
        .filter_map(|slot| table.column(&format!("Precaution_{slot}")))
        .collect();

    if slot_columns.len() < PRECAUTION_SLOTS {
        tracing::debug!(
            "Precaution table has {} of {PRECAUTION_SLOTS} precaution columns",
            slot_columns.len()
        );
    }

    table.rows(|disease, record| {
        PrecautionRecord::new(disease, slot_columns.iter().map(|&i| cell(record, i)))
    })
}
