//! Resolution pass
//!
//! Replaces every formula cell of a [`ParsedSheet`] with its computed value.
//!
//! # Ordering
//!
//! Formulas are visited in the iteration order of
//! [`ParsedSheet::formula_cells`], which is a hash map: the order is
//! unspecified and may differ between runs. Values are computed from the cell
//! map's pre-resolution text, so the order only shows through the memo table
//! and through which error is reported first when several formulas fail.
//!
//! # Failure
//!
//! The first error aborts the pass. Cells written before the failure keep
//! their computed values; nothing is rolled back.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use pipesheet_core::{Location, ParsedSheet};
//! use pipesheet_formula::SheetResolveExt;
//!
//! let mut sheet = ParsedSheet::new(
//!     vec![
//!         vec![Some("Sum:".into()), Some("#(sum A2 B2)".into())],
//!         vec![Some("2".into()), Some("1.5".into())],
//!     ],
//!     HashMap::from([
//!         ("A1".to_string(), "Sum:".to_string()),
//!         ("B1".to_string(), "#(sum A2 B2)".to_string()),
//!         ("A2".to_string(), "2".to_string()),
//!         ("B2".to_string(), "1.5".to_string()),
//!     ]),
//!     HashMap::from([("#(sum A2 B2)".to_string(), Location::new(0, 1))]),
//!     4,
//!     2,
//! );
//!
//! sheet.resolve().unwrap();
//! assert_eq!(sheet.records[0][1].as_deref(), Some("3.5"));
//! ```

use pipesheet_core::number::format_number;
use pipesheet_core::ParsedSheet;

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::Evaluator;

/// Options for a resolution pass
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Report self-referencing formulas as
    /// [`FormulaError::CircularReference`]. When off, such a formula recurses
    /// until the stack is exhausted.
    pub detect_cycles: bool,
}

/// Statistics from a resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Number of entries in the formula map
    pub formula_count: usize,
    /// Number of grid cells overwritten with a value
    pub cells_resolved: usize,
    /// Number of operand lookups answered from the memo table
    pub memo_hits: usize,
}

/// Extension trait for ParsedSheet to add resolution methods
pub trait SheetResolveExt {
    /// Resolve all formulas with default options
    fn resolve(&mut self) -> FormulaResult<ResolveStats>;

    /// Resolve all formulas with custom options
    fn resolve_with_options(&mut self, options: &ResolveOptions) -> FormulaResult<ResolveStats>;
}

impl SheetResolveExt for ParsedSheet {
    fn resolve(&mut self) -> FormulaResult<ResolveStats> {
        self.resolve_with_options(&ResolveOptions::default())
    }

    fn resolve_with_options(&mut self, options: &ResolveOptions) -> FormulaResult<ResolveStats> {
        Resolver::new(options.clone()).resolve(self)
    }
}

/// Runs resolution passes, reusing one evaluator
#[derive(Debug)]
pub struct Resolver {
    evaluator: Evaluator,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolveOptions::default())
    }
}

impl Resolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            evaluator: Evaluator::with_cycle_detection(options.detect_cycles),
        }
    }

    /// Resolve every formula in `sheet`, writing values into its grid.
    ///
    /// The memo table is shared by all formulas of the pass and is empty again
    /// when this returns, whether the pass succeeded or not.
    pub fn resolve(&mut self, sheet: &mut ParsedSheet) -> FormulaResult<ResolveStats> {
        self.evaluator.clear();
        let result = self.resolve_all(sheet);
        self.evaluator.clear();
        result
    }

    fn resolve_all(&mut self, sheet: &mut ParsedSheet) -> FormulaResult<ResolveStats> {
        let mut stats = ResolveStats {
            formula_count: sheet.formula_cells.len(),
            ..Default::default()
        };

        if !sheet.has_formulas() {
            return Ok(stats);
        }

        for (expression, &location) in &sheet.formula_cells {
            let value = self.evaluator.evaluate(expression, &sheet.cells)?;

            let slot = sheet
                .records
                .get_mut(location.row)
                .and_then(|row| row.get_mut(location.col))
                .ok_or_else(|| FormulaError::InvalidLocation {
                    expression: expression.clone(),
                    location,
                })?;
            *slot = Some(format_number(value));
            stats.cells_resolved += 1;
        }

        stats.memo_hits = self.evaluator.memo_hits();
        log::debug!(
            "Resolved {} formulas ({} memo hits)",
            stats.cells_resolved,
            stats.memo_hits
        );
        Ok(stats)
    }
}
