//! Top-level error type
//!
//! Wraps the error of whichever stage failed. Messages are passed through
//! unchanged so the user sees the offending file, cell or operator.

use thiserror::Error;

use pipesheet_csv::CsvError;
use pipesheet_formula::FormulaError;
use pipesheet_text::TextError;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a sheet
#[derive(Debug, Error)]
pub enum Error {
    /// Loading the input failed
    #[error(transparent)]
    Load(#[from] CsvError),

    /// A formula could not be resolved
    #[error(transparent)]
    Formula(#[from] FormulaError),

    /// Writing the output failed
    #[error(transparent)]
    Render(#[from] TextError),
}
