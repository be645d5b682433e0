//! # pipesheet-csv
//!
//! CSV table loader for pipesheet.
//!
//! Reads delimited text into a [`ParsedSheet`](pipesheet_core::ParsedSheet):
//! the row grid, the address → text cell map, the formula locations and the
//! layout metrics the renderer needs.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
