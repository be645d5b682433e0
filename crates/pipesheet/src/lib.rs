//! # pipesheet
//!
//! Converts CSV sheets containing `#(sum ...)` and `#(prod ...)` formulas
//! into fixed-width, pipe-delimited text tables.
//!
//! ## Features
//!
//! - Load delimited text into a grid with A1-style cell addresses
//! - Resolve formulas, including formulas that reference other formulas
//! - Render aligned text with `#hl` horizontal rules
//!
//! ## Example
//!
//! ```rust
//! use pipesheet::prelude::*;
//!
//! let csv = "Values,Factor\n2,1.5\nTotal:,#(prod A2 B2)\n";
//! let text = convert_str(csv, &ConvertOptions::default()).unwrap();
//!
//! assert_eq!(text, "Values|Factor\n   2.0|   1.5\nTotal:|   3.0");
//! ```

pub mod error;
pub mod prelude;
pub mod spreadsheet;

pub use error::{Error, Result};
pub use spreadsheet::{convert_str, render, ConversionOutput, ConvertOptions, SpreadSheet};

// Re-export core types
pub use pipesheet_core::{
    number, CellAddress, Location, ParsedSheet, Row, HORIZONTAL_RULE, MAX_COLS, MAX_ROW_CELLS,
};

// Re-export formula types
pub use pipesheet_formula::{
    is_calculable, is_formula, Evaluator, FormulaError, FormulaExpr, FormulaResult, Operator,
    ResolveOptions, ResolveStats, Resolver, SheetResolveExt,
};

// Re-export I/O types
pub use pipesheet_csv::{CsvError, CsvReadOptions, CsvReader};
pub use pipesheet_text::{Layout, TextError, TextWriteOptions, TextWriter};
