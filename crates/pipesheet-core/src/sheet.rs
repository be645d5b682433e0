//! Parsed sheet type
//!
//! A [`ParsedSheet`] is what the loader hands to the resolver and, after
//! resolution, what the renderer consumes.

use std::collections::HashMap;

use crate::cell::Location;

/// One row of raw cell text; `None` marks an absent cell
pub type Row = Vec<Option<String>>;

/// The contents of a loaded sheet
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedSheet {
    /// Grid of raw cell text, in row order
    pub records: Vec<Row>,
    /// Raw text by A1 address (e.g. `B5 -> "Factor"`), as loaded
    ///
    /// Resolution writes computed values into `records` only; this map keeps
    /// the pre-resolution text.
    pub cells: HashMap<String, String>,
    /// Formula text to its position in `records`
    ///
    /// Keyed by the expression itself, so two cells holding the same formula
    /// text share one entry and the last one loaded wins.
    pub formula_cells: HashMap<String, Location>,
    /// Length of the longest non-formula cell, in characters
    pub longest_value: usize,
    /// Number of cells in the widest row
    pub widest_row: usize,
}

impl ParsedSheet {
    /// Create a sheet from its parts
    pub fn new(
        records: Vec<Row>,
        cells: HashMap<String, String>,
        formula_cells: HashMap<String, Location>,
        longest_value: usize,
        widest_row: usize,
    ) -> Self {
        Self {
            records,
            cells,
            formula_cells,
            longest_value,
            widest_row,
        }
    }

    /// Number of rows in the grid
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Check whether any formula is waiting to be resolved
    pub fn has_formulas(&self) -> bool {
        !self.formula_cells.is_empty()
    }
}
