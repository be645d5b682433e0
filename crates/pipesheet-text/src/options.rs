//! Text output options

use pipesheet_core::{ParsedSheet, HORIZONTAL_RULE};

/// Options for writing text tables
#[derive(Debug, Clone)]
pub struct TextWriteOptions {
    /// Column separator (default: pipe)
    pub column_separator: char,
    /// Cell text rendered as a horizontal rule (default: `#hl`)
    pub horizontal_rule: String,
    /// Character repeated across a horizontal rule cell
    pub rule_char: char,
    /// Character used for padding and absent cells
    pub fill_char: char,
}

impl Default for TextWriteOptions {
    fn default() -> Self {
        Self {
            column_separator: '|',
            horizontal_rule: HORIZONTAL_RULE.to_string(),
            rule_char: '-',
            fill_char: ' ',
        }
    }
}

/// Column geometry of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Width of every column, in characters
    pub width: usize,
    /// Number of cells in the widest row
    pub columns: usize,
}

impl Layout {
    pub fn new(width: usize, columns: usize) -> Self {
        Self { width, columns }
    }

    /// Layout from the metrics gathered at load time
    pub fn of(sheet: &ParsedSheet) -> Self {
        Self::new(sheet.longest_value, sheet.widest_row)
    }
}
