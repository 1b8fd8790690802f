//! Shared reader for the comma-separated dataset tables.
//!
//! Both tables have a header row and a `Disease` column. Rows may be shorter than
//! the header; absent cells read as empty strings.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use flate2::read::GzDecoder;
use thiserror::Error;

use crate::utils::validation::{check_record_limit, MAX_RECORDS};

/// Name of the column identifying the disease in both tables
pub const DISEASE_COLUMN: &str = "Disease";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Row {row} has no value in the '{column}' column")]
    MissingValue { row: usize, column: String },

    #[error("Too many records: exceeds maximum of {0}")]
    TooManyRecords(usize),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a table file, decompressing `.gz`/`.bgz` files on the fly.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened.
pub fn open_file(path: &Path) -> Result<Box<dyn Read>, LoadError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    if is_gzipped(path) {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}

/// A dataset table positioned after its header row
pub struct Table<R: Read> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    disease_column: usize,
}

impl<R: Read> Table<R> {
    /// Read the header row and locate the `Disease` column.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Csv` if the header row cannot be read, or
    /// `LoadError::MissingColumn` if there is no `Disease` column.
    pub fn from_reader(source: R) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        let disease_column = headers
            .iter()
            .position(|h| h.trim() == DISEASE_COLUMN)
            .ok_or_else(|| LoadError::MissingColumn(DISEASE_COLUMN.to_string()))?;

        Ok(Self {
            reader,
            headers,
            disease_column,
        })
    }

    /// Indices of the columns whose name satisfies `predicate`, in column order
    pub fn columns_where(&self, predicate: impl Fn(&str) -> bool) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, name)| predicate(name))
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the column with exactly this name
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Read every data row, handing the disease name and the raw row to `build`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::MissingValue` for a row without a disease name,
    /// `LoadError::TooManyRecords` if the table has more than `MAX_RECORDS` rows,
    /// or `LoadError::Csv` for malformed CSV.
    pub fn rows<T>(self, build: impl FnMut(String, &StringRecord) -> T) -> Result<Vec<T>, LoadError> {
        self.rows_with_limit(MAX_RECORDS, build)
    }

    /// Like [`Table::rows`], but with an explicit row limit.
    ///
    /// # Errors
    ///
    /// As [`Table::rows`]; `LoadError::TooManyRecords` carries `limit`.
    pub fn rows_with_limit<T>(
        mut self,
        limit: usize,
        mut build: impl FnMut(String, &StringRecord) -> T,
    ) -> Result<Vec<T>, LoadError> {
        let mut out = Vec::new();

        for (i, record) in self.reader.records().enumerate() {
            let record = record?;

            // Row numbers in errors are 1-based and count data rows only
            let row = i + 1;

            let disease = record.get(self.disease_column).unwrap_or_default();
            if disease.trim().is_empty() {
                return Err(LoadError::MissingValue {
                    row,
                    column: DISEASE_COLUMN.to_string(),
                });
            }

            if let Some(msg) = check_record_limit(out.len(), limit) {
                tracing::warn!("{msg}");
                return Err(LoadError::TooManyRecords(limit));
            }

            out.push(build(disease.to_string(), &record));
        }

        Ok(out)
    }
}

/// Value of a cell, or the empty string when the row is too short
#[must_use]
pub fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default()
}
