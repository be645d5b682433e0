//! # pipesheet-formula
//!
//! Formula resolution for pipesheet.
//!
//! This crate provides:
//! - Formula classification (is this cell text a formula?)
//! - Formula parsing (`#(sum A1 B1)` → operator + operand addresses)
//! - Memoized, recursive evaluation against the loaded cell map
//! - The resolution pass that writes computed values back into the grid
//!
//! ## Example
//!
//! ```rust,ignore
//! use pipesheet_formula::SheetResolveExt;
//!
//! let stats = sheet.resolve()?;
//! println!("Resolved {} formulas", stats.cells_resolved);
//! ```

pub mod classifier;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod resolver;

pub use classifier::{is_calculable, is_formula};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::Evaluator;
pub use expression::{FormulaExpr, Operator};
pub use resolver::{ResolveOptions, ResolveStats, Resolver, SheetResolveExt};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn sheet_cells(values: &[f32]) -> (HashMap<String, String>, Vec<String>) {
        let mut cells = HashMap::new();
        let mut operands = Vec::new();
        for (row, value) in values.iter().enumerate() {
            let address = format!("A{}", row + 1);
            cells.insert(address.clone(), value.to_string());
            operands.push(address);
        }
        (cells, operands)
    }

    proptest! {
        #[test]
        fn sum_matches_left_to_right_reduction(values in prop::collection::vec(-1000i16..1000, 1..20)) {
            let values: Vec<f32> = values.into_iter().map(|v| v as f32 / 4.0).collect();
            let (cells, operands) = sheet_cells(&values);
            let formula = format!("#(sum {})", operands.join(" "));

            let expected = values.iter().fold(0.0f32, |acc, v| acc + v);
            let actual = Evaluator::new().evaluate(&formula, &cells).unwrap();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prod_matches_left_to_right_reduction(values in prop::collection::vec(-8i8..8, 1..8)) {
            let values: Vec<f32> = values.into_iter().map(|v| v as f32 * 0.5).collect();
            let (cells, operands) = sheet_cells(&values);
            let formula = format!("#(prod {})", operands.join(" "));

            let expected = values.iter().fold(1.0f32, |acc, v| acc * v);
            let actual = Evaluator::new().evaluate(&formula, &cells).unwrap();
            prop_assert_eq!(actual, expected);
        }
    }
}
