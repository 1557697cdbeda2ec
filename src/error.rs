//! Error types for the render pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Failures surfaced by the render pipeline.
///
/// Every variant carries the path it failed on; a run aborts on the first
/// error. An unmatched placeholder is not an error and never appears here.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template file could not be read.
    #[error("failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        source: io::Error,
    },

    /// The data directory could not be listed.
    #[error("failed to list data directory {}: {source}", path.display())]
    DataDir {
        path: PathBuf,
        source: io::Error,
    },

    /// A data file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    CsvOpen {
        path: PathBuf,
        source: io::Error,
    },

    /// A data file was opened but its contents could not be parsed as CSV.
    #[error("failed to parse {}: {source}", path.display())]
    CsvData {
        path: PathBuf,
        source: csv::Error,
    },

    /// A data file has a header row but no data rows; there is no
    /// well-formed table to emit for it.
    #[error("{} has a header row but no data rows", path.display())]
    EmptyTable { path: PathBuf },

    /// The output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: io::Error,
    },
}
