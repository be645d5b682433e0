//! Prelude module - common imports for pipesheet users
//!
//! ```rust
//! use pipesheet::prelude::*;
//! ```

pub use crate::{
    // Conversion
    convert_str,
    ConversionOutput,
    ConvertOptions,
    SpreadSheet,

    // Core types
    CellAddress,
    Location,
    ParsedSheet,

    // Resolution
    ResolveOptions,
    ResolveStats,

    // I/O types
    CsvReadOptions,
    CsvReader,
    TextWriteOptions,
    TextWriter,

    // Error types
    Error,
    Result,

    // Extension traits
    SheetResolveExt,
};
