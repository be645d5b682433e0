//! Text writer error types

use thiserror::Error;

/// Result type for text output operations
pub type TextResult<T> = std::result::Result<T, TextError>;

/// Errors that can occur while writing a table
#[derive(Debug, Error)]
pub enum TextError {
    /// Output destination could not be created or written
    #[error("Could not write to a file: {path}")]
    SinkWriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
