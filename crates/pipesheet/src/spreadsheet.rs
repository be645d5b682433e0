//! Sheet conversion
//!
//! Runs the three stages in order: load the CSV input, resolve its formulas,
//! then write the fixed-width table.
//!
//! # Example
//!
//! ```rust,no_run
//! use pipesheet::SpreadSheet;
//!
//! let output = SpreadSheet::new("input.csv", "output.txt").run()?;
//! println!("{}", output.text);
//! # Ok::<(), pipesheet::Error>(())
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;
use pipesheet_core::ParsedSheet;
use pipesheet_csv::{CsvReadOptions, CsvReader};
use pipesheet_formula::{ResolveOptions, ResolveStats, SheetResolveExt};
use pipesheet_text::{Layout, TextWriteOptions, TextWriter};

/// Options for every stage of a conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub read: CsvReadOptions,
    pub resolve: ResolveOptions,
    pub write: TextWriteOptions,
}

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The rendered table
    pub text: String,
    /// Number of rows loaded from the input
    pub rows: usize,
    /// Statistics from the resolution pass
    pub stats: ResolveStats,
}

/// Converts one CSV file into one text file
#[derive(Debug, Clone)]
pub struct SpreadSheet {
    input: PathBuf,
    output: PathBuf,
    options: ConvertOptions,
}

impl SpreadSheet {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Self {
        Self::with_options(input, output, ConvertOptions::default())
    }

    pub fn with_options<P: AsRef<Path>, Q: AsRef<Path>>(
        input: P,
        output: Q,
        options: ConvertOptions,
    ) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            options,
        }
    }

    /// Load, resolve and write the sheet
    pub fn run(&self) -> Result<ConversionOutput> {
        let mut sheet = CsvReader::read_file(&self.input, &self.options.read)?;
        let rows = sheet.row_count();
        let stats = sheet.resolve_with_options(&self.options.resolve)?;
        let text = TextWriter::write_file(&sheet, &self.output, &self.options.write)?;

        log::debug!(
            "Converted {} -> {} ({} rows, {} formulas)",
            self.input.display(),
            self.output.display(),
            rows,
            stats.cells_resolved
        );

        Ok(ConversionOutput { text, rows, stats })
    }
}

/// Convert CSV text to a text table without touching the filesystem
///
/// ```rust
/// use pipesheet::{convert_str, ConvertOptions};
///
/// let text = convert_str("2,1.5\nSum:,#(sum A1 B1)\n", &ConvertOptions::default()).unwrap();
/// assert_eq!(text, " 2.0| 1.5\nSum:| 3.5");
/// ```
pub fn convert_str(input: &str, options: &ConvertOptions) -> Result<String> {
    let mut sheet = CsvReader::read(input.as_bytes(), &options.read)?;
    sheet.resolve_with_options(&options.resolve)?;
    Ok(render(&sheet, &options.write))
}

/// Render an already resolved sheet
pub fn render(sheet: &ParsedSheet, options: &TextWriteOptions) -> String {
    TextWriter::render(&sheet.records, Layout::of(sheet), options)
}
