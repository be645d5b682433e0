//! # pipesheet-core
//!
//! Core data structures for the pipesheet converter.
//!
//! This crate provides the types shared by the loader, the formula resolver
//! and the text renderer:
//! - [`CellAddress`] - A1-style cell names with single-letter columns
//! - [`Location`] - A cell's position in the parsed grid
//! - [`ParsedSheet`] - The grid plus the lookup maps built at load time
//! - [`number`] - Parsing and formatting of single-precision cell numbers
//!
//! ## Example
//!
//! ```rust
//! use pipesheet_core::{CellAddress, Location};
//!
//! let addr = CellAddress::from_indices(1, 0).unwrap();
//! assert_eq!(addr.to_string(), "A2");
//!
//! let loc = Location::new(1, 0);
//! assert_eq!(loc.row, addr.row as usize);
//! ```

pub mod cell;
pub mod error;
pub mod number;
pub mod sheet;

// Re-exports for convenience
pub use cell::{CellAddress, Location};
pub use error::{Error, Result};
pub use sheet::{ParsedSheet, Row};

/// Number of addressable columns (single letters A-Z)
pub const MAX_COLS: usize = 26;

/// Maximum number of cells the loader accepts in one row
pub const MAX_ROW_CELLS: usize = 25;

/// Cell text that renders as a horizontal rule
pub const HORIZONTAL_RULE: &str = "#hl";
