//! Formula classifier
//!
//! Decides whether raw cell text is a formula expression.

use once_cell::sync::Lazy;
use regex::Regex;

static SUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\(sum(?-u:\s).*\)$").expect("valid regex"));
static PROD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\(prod(?-u:\s).*\)$").expect("valid regex"));

/// Check whether a cell's text is a calculable formula.
///
/// Absent cells are never calculable.
///
/// # Example
/// ```rust
/// use pipesheet_formula::is_calculable;
///
/// assert!(is_calculable(Some("#(sum A1 B1)")));
/// assert!(!is_calculable(Some("sum A1 B1")));
/// assert!(!is_calculable(None));
/// ```
pub fn is_calculable(value: Option<&str>) -> bool {
    value.is_some_and(is_formula)
}

/// Check whether present cell text is a calculable formula
pub fn is_formula(text: &str) -> bool {
    SUM.is_match(text) || PROD.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_cell() {
        assert!(!is_calculable(None));
    }

    #[test]
    fn test_recognized_formulas() {
        assert!(is_formula("#(sum A1 B1)"));
        assert!(is_formula("#(prod A6 A7 B6)"));
        assert!(is_formula("#(sum A1)"));
        assert!(is_formula("#(sum\tA1)"));
        assert!(is_formula("#(prod\x0BA1)"));
        // Anything may follow the keyword's whitespace
        assert!(is_formula("#(sum )"));
        assert!(is_formula("#(prod x y z)"));
    }

    #[test]
    fn test_rejected_text() {
        assert!(!is_formula(""));
        assert!(!is_formula("sum A1 B1"));
        assert!(!is_formula("#(sub A1 B1)"));
        assert!(!is_formula("#(SUM A1 B1)"));
        assert!(!is_formula("#(sumA1 B1)"));
        assert!(!is_formula("#(prod A2 B2"));
        assert!(!is_formula(" #(sum A1 B1)"));
        assert!(!is_formula("#(sum A1 B1) "));
        assert!(!is_formula("#hl"));
        // Only ASCII whitespace separates the keyword
        assert!(!is_formula("#(sum\u{a0}A1)"));
        assert!(!is_formula("#(prod\u{2003}A1 B1)"));
        assert!(!is_formula("3.5"));
    }
}
