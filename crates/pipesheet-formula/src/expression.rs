//! Formula expression types and parsing
//!
//! A formula has the shape `#(<operator> <operand> <operand> ...)`, where
//! each operand is a cell address such as `A1`.

use std::fmt;
use std::str::FromStr;

use crate::error::{FormulaError, FormulaResult};

/// Reduction operator of a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `sum`: addition starting from 0
    Sum,
    /// `prod`: multiplication starting from 1
    Prod,
}

impl Operator {
    /// Starting value of the reduction
    pub fn identity(self) -> f32 {
        match self {
            Operator::Sum => 0.0,
            Operator::Prod => 1.0,
        }
    }

    /// Fold one operand into the accumulator
    pub fn apply(self, acc: f32, value: f32) -> f32 {
        match self {
            Operator::Sum => acc + value,
            Operator::Prod => acc * value,
        }
    }

    /// Keyword as written in a formula
    pub fn keyword(self) -> &'static str {
        match self {
            Operator::Sum => "sum",
            Operator::Prod => "prod",
        }
    }
}

impl FromStr for Operator {
    type Err = FormulaError;

    fn from_str(s: &str) -> FormulaResult<Self> {
        match s {
            "sum" => Ok(Operator::Sum),
            "prod" => Ok(Operator::Prod),
            other => Err(FormulaError::UnsupportedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parsed formula, borrowing its operand addresses from the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaExpr<'a> {
    pub operator: Operator,
    /// Operand addresses in written order
    pub operands: Vec<&'a str>,
}

impl<'a> FormulaExpr<'a> {
    /// Parse formula text into its operator and operands.
    ///
    /// The body is split on every single whitespace character, so a run of
    /// spaces leaves an empty operand between its words. Empty tokens at the
    /// end are dropped.
    ///
    /// The operator is checked before anything else, so an unknown keyword is
    /// reported even when its operands would not resolve.
    ///
    /// # Example
    /// ```rust
    /// use pipesheet_formula::{FormulaExpr, Operator};
    ///
    /// let expr = FormulaExpr::parse("#(prod A6 B6)").unwrap();
    /// assert_eq!(expr.operator, Operator::Prod);
    /// assert_eq!(expr.operands, vec!["A6", "B6"]);
    /// ```
    pub fn parse(text: &'a str) -> FormulaResult<Self> {
        let body = text
            .strip_prefix("#(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| FormulaError::MalformedExpression(text.to_string()))?;

        let mut tokens: Vec<&str> = body.split(is_separator).collect();
        while tokens.last().is_some_and(|token| token.is_empty()) {
            tokens.pop();
        }

        let mut tokens = tokens.into_iter();
        let operator = tokens.next().unwrap_or("").parse()?;

        Ok(Self {
            operator,
            operands: tokens.collect(),
        })
    }
}

/// ASCII whitespace, including vertical tab
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

impl fmt::Display for FormulaExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#({}", self.operator)?;
        for operand in &self.operands {
            write!(f, " {}", operand)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_sum() {
        let expr = FormulaExpr::parse("#(sum C6 C7 C8)").unwrap();
        assert_eq!(expr.operator, Operator::Sum);
        assert_eq!(expr.operands, vec!["C6", "C7", "C8"]);
    }

    #[test]
    fn test_parse_keeps_empty_operands() {
        let expr = FormulaExpr::parse("#(prod  A1\tB1 )").unwrap();
        assert_eq!(expr.operator, Operator::Prod);
        assert_eq!(expr.operands, vec!["", "A1", "B1"]);

        let expr = FormulaExpr::parse("#(sum A1  \x0BB1)").unwrap();
        assert_eq!(expr.operands, vec!["A1", "", "", "B1"]);
    }

    #[test]
    fn test_parse_drops_trailing_separators() {
        let expr = FormulaExpr::parse("#(sum A1 B1  \t)").unwrap();
        assert_eq!(expr.operands, vec!["A1", "B1"]);
    }

    #[test]
    fn test_parse_ignores_unicode_spaces() {
        let expr = FormulaExpr::parse("#(sum A1\u{a0}B1)").unwrap();
        assert_eq!(expr.operands, vec!["A1\u{a0}B1"]);
    }

    #[test]
    fn test_parse_without_operands() {
        let expr = FormulaExpr::parse("#(sum )").unwrap();
        assert!(expr.operands.is_empty());
        assert_eq!(expr.operator.identity(), 0.0);
    }

    #[test]
    fn test_unknown_operator() {
        assert_eq!(
            FormulaExpr::parse("#(sub A1 B1)"),
            Err(FormulaError::UnsupportedOperator("sub".into()))
        );
        assert_eq!(
            FormulaExpr::parse("#()"),
            Err(FormulaError::UnsupportedOperator(String::new()))
        );
    }

    #[test]
    fn test_missing_wrapper() {
        assert_eq!(
            FormulaExpr::parse("sum A1 B1"),
            Err(FormulaError::MalformedExpression("sum A1 B1".into()))
        );
        assert!(FormulaExpr::parse("#(prod A2 B2").is_err());
        assert!(FormulaExpr::parse("#").is_err());
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Sum.apply(Operator::Sum.identity(), 2.5), 2.5);
        assert_eq!(Operator::Prod.apply(Operator::Prod.identity(), 2.5), 2.5);
        assert_eq!(Operator::Prod.apply(2.0, 1.5), 3.0);
    }

    #[test]
    fn test_display_round_trip() {
        let text = "#(prod A6 A7 B6)";
        assert_eq!(FormulaExpr::parse(text).unwrap().to_string(), text);
    }
}
