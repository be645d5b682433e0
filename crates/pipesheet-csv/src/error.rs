//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while loading a table
#[derive(Debug, Error)]
pub enum CsvError {
    /// Input file does not exist
    #[error("File {path} NOT FOUND!")]
    SourceNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Row with more cells than allowed (row is 1-based)
    #[error("Row #{row} exceeds maximum allowed columns")]
    ColumnLimitExceeded { row: usize, max: usize },

    /// IO error
    #[error("Could not read file: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] pipesheet_core::Error),
}
