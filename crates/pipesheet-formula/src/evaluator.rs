//! Formula evaluator
//!
//! Evaluates formula text against the cell map built at load time. Operands
//! that hold formulas are evaluated recursively, so chains like
//! `D1 = #(sum C1 A1)` with `C1 = #(prod A1 B1)` resolve in one call.
//!
//! Every operand value is memoized under the raw text that produced it, not
//! under its address: two cells holding `"2"` share one memo entry, and a
//! formula referenced from several places is only evaluated once per pass.

use std::collections::HashMap;

use ahash::AHashMap;
use pipesheet_core::number::parse_number;

use crate::classifier::is_formula;
use crate::error::{FormulaError, FormulaResult};
use crate::expression::FormulaExpr;

/// Evaluates formulas, caching operand values for the lifetime of one pass
#[derive(Debug, Default)]
pub struct Evaluator {
    memo: AHashMap<String, f32>,
    /// Formulas currently being evaluated, innermost last
    in_progress: Vec<String>,
    detect_cycles: bool,
    memo_hits: usize,
}

impl Evaluator {
    /// Create an evaluator without cycle detection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator that reports self-referencing formulas as
    /// [`FormulaError::CircularReference`] instead of recursing forever
    pub fn with_cycle_detection(detect_cycles: bool) -> Self {
        Self {
            detect_cycles,
            ..Self::default()
        }
    }

    /// Evaluate formula text against `cells`.
    ///
    /// # Example
    /// ```rust
    /// use std::collections::HashMap;
    /// use pipesheet_formula::Evaluator;
    ///
    /// let cells = HashMap::from([
    ///     ("A2".to_string(), "2".to_string()),
    ///     ("B2".to_string(), "1.5".to_string()),
    /// ]);
    /// let mut evaluator = Evaluator::new();
    /// assert_eq!(evaluator.evaluate("#(sum A2 B2)", &cells).unwrap(), 3.5);
    /// ```
    pub fn evaluate(&mut self, text: &str, cells: &HashMap<String, String>) -> FormulaResult<f32> {
        let expr = FormulaExpr::parse(text)?;

        if self.detect_cycles {
            if self.in_progress.iter().any(|f| f == text) {
                return Err(FormulaError::CircularReference(text.to_string()));
            }
            self.in_progress.push(text.to_string());
        }

        let result = self.reduce(&expr, cells);

        if self.detect_cycles {
            self.in_progress.pop();
        }
        result
    }

    fn reduce(&mut self, expr: &FormulaExpr<'_>, cells: &HashMap<String, String>) -> FormulaResult<f32> {
        let mut acc = expr.operator.identity();
        for operand in &expr.operands {
            let value = self.resolve_operand(operand, cells)?;
            acc = expr.operator.apply(acc, value);
        }
        Ok(acc)
    }

    /// Resolve one operand address to a number
    fn resolve_operand(&mut self, address: &str, cells: &HashMap<String, String>) -> FormulaResult<f32> {
        let raw = cells
            .get(address)
            .ok_or_else(|| FormulaError::EmptyOrInvalidOperand(address.to_string()))?;

        if let Some(&value) = self.memo.get(raw.as_str()) {
            log::trace!("memo hit for {} ({:?})", address, raw);
            self.memo_hits += 1;
            return Ok(value);
        }

        let value = if is_formula(raw) {
            self.evaluate(raw, cells)?
        } else {
            parse_number(raw).ok_or_else(|| FormulaError::InvalidNumericLiteral {
                address: address.to_string(),
                value: raw.clone(),
            })?
        };

        self.memo.insert(raw.clone(), value);
        Ok(value)
    }

    /// Memoized value for raw cell text, if any
    pub fn memoized(&self, raw: &str) -> Option<f32> {
        self.memo.get(raw).copied()
    }

    /// Number of operand lookups answered from the memo table since the last clear
    pub fn memo_hits(&self) -> usize {
        self.memo_hits
    }

    /// Forget all memoized values
    pub fn clear(&mut self) {
        self.memo.clear();
        self.in_progress.clear();
        self.memo_hits = 0;
    }
}
