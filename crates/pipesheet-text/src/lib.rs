//! # pipesheet-text
//!
//! Fixed-width, pipe-delimited text output for pipesheet.

mod error;
mod options;
mod writer;

pub use error::{TextError, TextResult};
pub use options::{Layout, TextWriteOptions};
pub use writer::TextWriter;
