//! CSV loading into ordered tables.
//!
//! A [`Table`] is one CSV file in memory: column names in header order and
//! one record per data row. Tables are transient; the driver loads one per
//! resolved placeholder and drops it after rendering.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};

/// Tabular data read from one CSV file.
///
/// Column order follows the file's header row. Every record has exactly
/// one cell per column; ragged rows are rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    source: PathBuf,
    columns: Vec<String>,
    records: Vec<Vec<String>>,
}

impl Table {
    /// Load a table from a CSV file.
    ///
    /// The first line is the header. Quoted fields may contain commas and
    /// embedded newlines. Fails with [`RenderError::CsvOpen`] if the file
    /// cannot be opened and [`RenderError::CsvData`] if it is not valid
    /// CSV (including rows whose field count differs from the header).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RenderError::CsvOpen {
            path: path.to_owned(),
            source,
        })?;
        let mut reader = csv::Reader::from_reader(file);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|source| RenderError::CsvData {
                path: path.to_owned(),
                source,
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| RenderError::CsvData {
                path: path.to_owned(),
                source,
            })?;
            records.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(
            "loaded {} with {} columns, {} rows",
            path.display(),
            columns.len(),
            records.len()
        );

        Ok(Self {
            source: path.to_owned(),
            columns,
            records,
        })
    }

    /// Path this table was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data records, one `Vec` of cells per row, cells in column order.
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
