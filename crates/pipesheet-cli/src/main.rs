//! pipesheet CLI - formula sheet to text table converter

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pipesheet::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pipesheet")]
#[command(
    author,
    version,
    about = "Resolve #(sum ...) / #(prod ...) formulas in a CSV sheet and render it as a text table"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CSV sheet into a fixed-width text table
    #[command(alias = "run")]
    Convert {
        /// Input CSV file
        input: PathBuf,

        /// Output text file
        output: PathBuf,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Fail on self-referencing formulas instead of recursing
        #[arg(long)]
        detect_cycles: bool,

        /// Do not echo the table to stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show information about a CSV sheet
    Info {
        /// Input CSV file
        input: PathBuf,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            delimiter,
            detect_cycles,
            quiet,
        } => convert(&input, &output, delimiter, detect_cycles, quiet),
        Commands::Info { input, delimiter } => show_info(&input, delimiter),
    }
}

fn read_options(delimiter: char) -> Result<CsvReadOptions> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("Delimiter '{}' must be a single ASCII character", delimiter))?;

    Ok(CsvReadOptions {
        delimiter,
        ..Default::default()
    })
}

fn convert(
    input: &Path,
    output: &Path,
    delimiter: char,
    detect_cycles: bool,
    quiet: bool,
) -> Result<()> {
    let options = ConvertOptions {
        read: read_options(delimiter)?,
        resolve: ResolveOptions { detect_cycles },
        ..Default::default()
    };

    let result = SpreadSheet::with_options(input, output, options)
        .run()
        .with_context(|| format!("Failed to convert '{}'", input.display()))?;

    if !quiet {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", result.text).context("Failed to write to stdout")?;
    }

    eprintln!(
        "Resolved {} formulas; wrote {} rows to '{}'",
        result.stats.cells_resolved,
        result.rows,
        output.display()
    );

    Ok(())
}

fn show_info(input: &Path, delimiter: char) -> Result<()> {
    let sheet = CsvReader::read_file(input, &read_options(delimiter)?)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Rows: {}", sheet.row_count());
    println!("Widest row: {} cells", sheet.widest_row);
    println!("Column width: {}", sheet.longest_value);
    println!("Formulas: {}", sheet.formula_cells.len());

    let mut formulas: Vec<_> = sheet.formula_cells.iter().collect();
    formulas.sort_by_key(|(_, location)| **location);
    for (expression, location) in formulas {
        let address = CellAddress::from_indices(location.row, location.col)?;
        println!("  {}\t{}", address, expression);
    }

    Ok(())
}
