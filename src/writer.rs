//! Delimited-text writer.

use crate::dialect::Dialect;
use csv_types::{cells_to_csv_line, quote_field, FieldFormat};
use table_core::Cell;

/// Accumulates records into one CSV string. Every record ends with `\n`.
pub struct CsvWriter<'a> {
    format: FieldFormat<'a>,
    buffer: String,
    records: usize,
}

impl<'a> CsvWriter<'a> {
    pub fn new(dialect: &'a Dialect, null_replacement: &'a str) -> Self {
        Self {
            format: FieldFormat {
                delimiter: &dialect.delimiter,
                quote_style: dialect.quote_style(),
                culture: &dialect.culture,
                null_replacement,
            },
            buffer: String::new(),
            records: 0,
        }
    }

    /// Write a record of plain text fields, such as a header line.
    pub fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) {
        let line: Vec<_> = fields
            .iter()
            .map(|f| quote_field(f.as_ref(), self.format.delimiter, self.format.quote_style))
            .collect();
        self.buffer.push_str(&line.join(self.format.delimiter));
        self.end_record();
    }

    /// Write a record of cells, formatted under the writer's culture.
    pub fn write_cells<'c, I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = &'c Cell>,
    {
        let line = cells_to_csv_line(cells, &self.format);
        self.buffer.push_str(&line);
        self.end_record();
    }

    fn end_record(&mut self) {
        self.buffer.push('\n');
        self.records += 1;
    }

    pub fn records_written(&self) -> usize {
        self.records
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
