//! Cell-related types
//!
//! This module contains:
//! - [`CellAddress`] - A cell's name in A1 notation (e.g., "A1")
//! - [`Location`] - A cell's position inside the parsed grid

mod address;
mod location;

pub use address::CellAddress;
pub use location::Location;
