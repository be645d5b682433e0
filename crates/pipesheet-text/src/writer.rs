//! Text table writer
//!
//! Every column has the same width. Absent cells are blank, horizontal rule
//! cells are filled with dashes, numbers are right-aligned and everything else
//! is left-aligned. Text wider than the column is written as is.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{TextError, TextResult};
use crate::options::{Layout, TextWriteOptions};
use pipesheet_core::number::{format_number, parse_number};
use pipesheet_core::{ParsedSheet, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    Left,
    Right,
}

/// Fixed-width text table writer
pub struct TextWriter;

impl TextWriter {
    /// Write a sheet's grid to a file, returning the text that was written
    pub fn write_file<P: AsRef<Path>>(
        sheet: &ParsedSheet,
        path: P,
        options: &TextWriteOptions,
    ) -> TextResult<String> {
        let path = path.as_ref();
        let sink_error = |source| TextError::SinkWriteFailure {
            path: path.display().to_string(),
            source,
        };

        let mut file = File::create(path).map_err(sink_error)?;
        let text = Self::write(sheet, &mut file, options).map_err(sink_error)?;

        log::debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(text)
    }

    /// Write a sheet's grid to a writer, returning the text that was written
    pub fn write<W: Write>(
        sheet: &ParsedSheet,
        mut writer: W,
        options: &TextWriteOptions,
    ) -> std::io::Result<String> {
        let text = Self::render(&sheet.records, Layout::of(sheet), options);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(text)
    }

    /// Render rows as a fixed-width table.
    ///
    /// A separator follows each cell except a row's last one, unless the row
    /// is narrower than the layout. Rows are joined by newlines; empty rows
    /// produce no output at all.
    pub fn render(records: &[Row], layout: Layout, options: &TextWriteOptions) -> String {
        let mut out = String::new();
        let last_row = records.len().saturating_sub(1);

        for (row_idx, record) in records.iter().enumerate() {
            for (col, cell) in record.iter().enumerate() {
                match cell.as_deref() {
                    None => push_repeated(&mut out, options.fill_char, layout.width),
                    Some(text) if text == options.horizontal_rule => {
                        push_repeated(&mut out, options.rule_char, layout.width)
                    }
                    Some(text) => match parse_number(text) {
                        Some(value) => pad(
                            &mut out,
                            &format_number(value),
                            Alignment::Right,
                            layout.width,
                            options.fill_char,
                        ),
                        None => pad(&mut out, text, Alignment::Left, layout.width, options.fill_char),
                    },
                }

                if col + 1 != record.len() || col + 1 < layout.columns {
                    out.push(options.column_separator);
                }
            }

            if row_idx != last_row && !record.is_empty() {
                out.push('\n');
            }
        }

        out
    }
}

fn push_repeated(out: &mut String, c: char, count: usize) {
    out.extend(std::iter::repeat(c).take(count));
}

fn pad(out: &mut String, text: &str, alignment: Alignment, width: usize, fill: char) {
    let padding = width.saturating_sub(text.chars().count());
    match alignment {
        Alignment::Left => {
            out.push_str(text);
            push_repeated(out, fill, padding);
        }
        Alignment::Right => {
            push_repeated(out, fill, padding);
            out.push_str(text);
        }
    }
}
