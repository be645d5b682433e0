//! Formula error types

use pipesheet_core::Location;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while evaluating or resolving formulas
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// Operator keyword other than `sum` or `prod`
    #[error("Unexpected operator: {0}")]
    UnsupportedOperator(String),

    /// Operand address with no value in the cell map
    #[error("Cell {0} is empty or is invalid!")]
    EmptyOrInvalidOperand(String),

    /// Operand value that is neither a formula nor a number
    #[error("Cell {address} does not hold a number: \"{value}\"")]
    InvalidNumericLiteral { address: String, value: String },

    /// Text without the `#(` ... `)` wrapper
    #[error("Malformed formula expression: {0}")]
    MalformedExpression(String),

    /// Formula that depends on itself (only reported when cycle detection is on)
    #[error("Circular reference detected in {0}")]
    CircularReference(String),

    /// Recorded formula position outside the grid
    #[error("Formula {expression} points outside the grid at {location}")]
    InvalidLocation {
        expression: String,
        location: Location,
    },
}
