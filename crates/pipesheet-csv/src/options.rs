//! CSV options

use pipesheet_core::MAX_ROW_CELLS;

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Maximum number of cells in a row (default: 25)
    pub max_columns: usize,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            max_columns: MAX_ROW_CELLS,
        }
    }
}
