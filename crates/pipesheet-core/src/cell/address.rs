//! Cell address type

use crate::error::{Error, Result};
use crate::MAX_COLS;
use std::fmt;

/// A cell address (e.g., "A1", "C12")
///
/// Columns are a single letter (A-Z), rows are 1-based in text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., Z=25)
    pub col: u8,
}

impl CellAddress {
    /// Create a new cell address from 0-based indices
    pub fn new(row: u32, col: u8) -> Self {
        Self { row, col }
    }

    /// Create a cell address from grid indices, checking the column bound
    pub fn from_indices(row: usize, col: usize) -> Result<Self> {
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        let row = u32::try_from(row)
            .map_err(|_| Error::InvalidAddress(format!("row index {} too large", row)))?;
        Ok(Self::new(row, col as u8))
    }

    /// Convert a column index to its letter (0 = A, 25 = Z)
    pub fn column_to_letter(col: u8) -> Result<char> {
        if col as usize >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as usize, MAX_COLS - 1));
        }
        Ok((b'A' + col) as char)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        // Only `new` can produce a column past Z
        let letter = Self::column_to_letter(self.col).unwrap_or('?');
        format!("{}{}", letter, self.row + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}
