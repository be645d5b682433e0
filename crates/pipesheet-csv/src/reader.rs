//! CSV reader

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use pipesheet_core::{CellAddress, Location, ParsedSheet};
use pipesheet_formula::is_formula;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a parsed sheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<ParsedSheet> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            let path = path.display().to_string();
            if source.kind() == io::ErrorKind::NotFound {
                CsvError::SourceNotFound { path, source }
            } else {
                CsvError::Io { path, source }
            }
        })?;

        Self::read(file, options)
    }

    /// Read CSV from a reader into a parsed sheet.
    ///
    /// Input is taken line by line and each line is one row. Fields are split
    /// on the delimiter with no quoting rules. Trailing empty fields are
    /// dropped unless the line has no delimiter at all, so `,,,` is an empty
    /// row while a blank line is a row with one empty cell.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<ParsedSheet> {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(options.delimiter)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .terminator(csv::Terminator::Any(b'\n'));

        let mut sheet = ParsedSheet::default();
        let mut record = csv::StringRecord::new();

        for line in BufReader::new(reader).lines() {
            let line = line.map_err(csv::Error::from)?;

            // The csv reader yields no record for a blank line
            let has_record = builder.from_reader(line.as_bytes()).read_record(&mut record)?;
            let mut fields: Vec<&str> = if has_record {
                record.iter().collect()
            } else {
                vec![""]
            };

            if fields.len() > 1 {
                while fields.last().is_some_and(|f| f.is_empty()) {
                    fields.pop();
                }
            }

            Self::push_row(&mut sheet, fields, options)?;
        }

        log::debug!(
            "Loaded {} rows ({} formulas, widest row {} cells)",
            sheet.records.len(),
            sheet.formula_cells.len(),
            sheet.widest_row
        );

        Ok(sheet)
    }

    /// Append one row, registering its cells and formulas
    fn push_row(sheet: &mut ParsedSheet, fields: Vec<&str>, options: &CsvReadOptions) -> CsvResult<()> {
        let row_idx = sheet.records.len();

        if fields.len() > options.max_columns {
            return Err(CsvError::ColumnLimitExceeded {
                row: row_idx + 1,
                max: options.max_columns,
            });
        }

        let mut row = Vec::with_capacity(fields.len());
        for (col, field) in fields.into_iter().enumerate() {
            let address = CellAddress::from_indices(row_idx, col)?;
            sheet.cells.insert(address.to_string(), field.to_string());

            if is_formula(field) {
                // Identical formula text in two cells keeps only the later location
                sheet
                    .formula_cells
                    .insert(field.to_string(), Location::new(row_idx, col));
            } else {
                sheet.longest_value = sheet.longest_value.max(field.chars().count());
            }

            row.push(Some(field.to_string()));
        }

        sheet.widest_row = sheet.widest_row.max(row.len());
        sheet.records.push(row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SAMPLE: &str = "\
,,,
Total:,#(sum C6 C7 C8),Sum test:,#(sum A6 B8)
,,Prod test:,#(prod A6 A7 B6)
#hl,#hl,#hl,
Values,Factor,,
2,1.5,#(prod A6 B6),
3,2,#(prod A7 B7),
4.5,2.5,#(prod A8 B8),
";

    fn read_str(input: &str) -> CsvResult<ParsedSheet> {
        CsvReader::read(input.as_bytes(), &CsvReadOptions::default())
    }

    fn row(cells: &[&str]) -> Vec<Option<String>> {
        cells.iter().map(|c| Some(c.to_string())).collect()
    }

    #[test]
    fn test_sample_cells() {
        let sheet = read_str(SAMPLE).unwrap();

        assert_eq!(sheet.cells["A5"], "Values");
        assert_eq!(sheet.cells["B5"], "Factor");
        assert_eq!(sheet.cells["B6"], "1.5");
        assert_eq!(sheet.cells["C8"], "#(prod A8 B8)");
        assert!(!sheet.cells.contains_key("D5"));
    }

    #[test]
    fn test_sample_metrics() {
        let sheet = read_str(SAMPLE).unwrap();

        // "Prod test:" is the longest non-formula text
        assert_eq!(sheet.longest_value, 10);
        assert_eq!(sheet.widest_row, 4);
    }

    #[test]
    fn test_sample_records() {
        let sheet = read_str(SAMPLE).unwrap();

        assert_eq!(sheet.records.len(), 8);
        assert!(sheet.records[0].is_empty());
        assert_eq!(sheet.records[2], row(&["", "", "Prod test:", "#(prod A6 A7 B6)"]));
        assert_eq!(sheet.records[3], row(&["#hl", "#hl", "#hl"]));
        assert_eq!(sheet.records[4], row(&["Values", "Factor"]));
    }

    #[test]
    fn test_sample_formula_locations() {
        let sheet = read_str(SAMPLE).unwrap();

        assert_eq!(sheet.formula_cells.len(), 6);
        assert_eq!(sheet.formula_cells["#(sum C6 C7 C8)"], Location::new(1, 1));
        assert_eq!(sheet.formula_cells["#(prod A6 A7 B6)"], Location::new(2, 3));
        assert_eq!(sheet.formula_cells["#(prod A8 B8)"], Location::new(7, 2));
    }

    #[test]
    fn test_duplicate_formula_text_keeps_last_location() {
        let sheet = read_str("1,2\n#(sum A1 B1),#(sum A1 B1)\n").unwrap();

        assert_eq!(sheet.formula_cells.len(), 1);
        assert_eq!(sheet.formula_cells["#(sum A1 B1)"], Location::new(1, 1));
    }

    #[test]
    fn test_formulas_excluded_from_width() {
        let sheet = read_str("ab,#(sum A2 A2 A2 A2 A2)\n1\n").unwrap();
        assert_eq!(sheet.longest_value, 2);
    }

    #[test]
    fn test_quotes_are_plain_text() {
        let sheet = read_str("\"a,b\",c\n").unwrap();
        assert_eq!(sheet.records[0], row(&["\"a", "b\"", "c"]));
    }

    #[test]
    fn test_blank_line_keeps_row_numbers() {
        let sheet = read_str("1\n\n2\n").unwrap();

        assert_eq!(sheet.records.len(), 3);
        assert_eq!(sheet.records[1], row(&[""]));
        assert_eq!(sheet.cells["A3"], "2");
    }

    #[test]
    fn test_trailing_blank_lines_are_rows() {
        let sheet = read_str("a,b\n\n\n").unwrap();

        assert_eq!(sheet.records.len(), 3);
        assert_eq!(sheet.records[1], row(&[""]));
        assert_eq!(sheet.records[2], row(&[""]));
        assert_eq!(sheet.cells["A2"], "");
        assert_eq!(sheet.cells["A3"], "");
        assert!(!sheet.cells.contains_key("A4"));
    }

    #[test]
    fn test_blank_lines_between_and_after_records() {
        let sheet = read_str("1\n\n\n2\n\n").unwrap();

        assert_eq!(sheet.records.len(), 5);
        assert_eq!(sheet.cells["A4"], "2");
        assert_eq!(sheet.cells["A5"], "");
    }

    #[test]
    fn test_line_counts() {
        assert_eq!(read_str("").unwrap().records.len(), 0);
        assert_eq!(read_str("\n").unwrap().records.len(), 1);
        assert_eq!(read_str("a").unwrap().records.len(), 1);
        assert_eq!(read_str("a\n").unwrap().records.len(), 1);
        assert_eq!(read_str("a\r\n\r\nb\r\n").unwrap().records.len(), 3);

        let sheet = read_str("a,b\r\nc\r\n").unwrap();
        assert_eq!(sheet.records[0], row(&["a", "b"]));
        assert_eq!(sheet.cells["A2"], "c");
    }

    #[test]
    fn test_custom_delimiter() {
        let options = CsvReadOptions {
            delimiter: b';',
            ..Default::default()
        };
        let sheet = CsvReader::read("2;1.5\n".as_bytes(), &options).unwrap();
        assert_eq!(sheet.records[0], row(&["2", "1.5"]));
    }

    #[test]
    fn test_column_limit() {
        let line = vec!["x"; 26].join(",");
        let err = read_str(&line).unwrap_err();

        assert!(matches!(err, CsvError::ColumnLimitExceeded { row: 1, max: 25 }));
        assert_eq!(err.to_string(), "Row #1 exceeds maximum allowed columns");
    }

    #[test]
    fn test_column_limit_counts_after_trailing_commas() {
        let line = format!("{},,,", vec!["x"; 25].join(","));
        let sheet = read_str(&line).unwrap();
        assert_eq!(sheet.widest_row, 25);
        assert_eq!(sheet.cells["Y1"], "x");
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let sheet = CsvReader::read_file(file.path(), &CsvReadOptions::default()).unwrap();
        assert_eq!(sheet.records.len(), 8);
    }

    #[test]
    fn test_missing_file() {
        let err = CsvReader::read_file("/doesnotexist.csv", &CsvReadOptions::default()).unwrap_err();

        assert!(matches!(err, CsvError::SourceNotFound { .. }));
        assert_eq!(err.to_string(), "File /doesnotexist.csv NOT FOUND!");
    }
}
