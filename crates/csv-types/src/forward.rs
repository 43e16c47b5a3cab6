//! Forward conversion: Cell → CSV field text.
//!
//! This module renders table-core's `Cell` values as culture-formatted text
//! and applies the write-time quoting policy.

use std::borrow::Cow;
use table_core::{Cell, Culture};

/// Wrapper for CSV field text before quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Render `cell` under `culture`, substituting `null_replacement` for null.
    pub fn from_cell(cell: &Cell, culture: &Culture, null_replacement: &str) -> Self {
        CsvValue(
            cell.format(culture)
                .unwrap_or_else(|| null_replacement.to_string()),
        )
    }

    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner CSV string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// When fields are wrapped in double quotes on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Quote only fields where the delimiter, a quote or a line break would
    /// be misread; embedded quotes are doubled
    #[default]
    Necessary,

    /// Quote every field, header included
    Always,

    /// Never quote, even when the output becomes ambiguous
    Never,
}

/// Everything needed to turn a row of cells into one CSV line.
#[derive(Debug, Clone)]
pub struct FieldFormat<'a> {
    pub delimiter: &'a str,
    pub quote_style: QuoteStyle,
    pub culture: &'a Culture,
    pub null_replacement: &'a str,
}

/// Apply the quoting policy to one field.
pub fn quote_field<'a>(value: &'a str, delimiter: &str, style: QuoteStyle) -> Cow<'a, str> {
    match style {
        QuoteStyle::Never => Cow::Borrowed(value),
        QuoteStyle::Always => Cow::Owned(format!("\"{}\"", value.replace('"', "\"\""))),
        QuoteStyle::Necessary => {
            let needs_quotes = ends_ambiguously(value, delimiter)
                || value.contains('"')
                || value.contains('\n')
                || value.contains('\r');
            if needs_quotes {
                Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
            } else {
                Cow::Borrowed(value)
            }
        }
    }
}

/// True when the delimiter written after `value` would be found before the
/// value ends. This covers a contained delimiter and, for multi-character
/// delimiters, a value ending in a prefix of the delimiter.
fn ends_ambiguously(value: &str, delimiter: &str) -> bool {
    if delimiter.is_empty() {
        return false;
    }
    format!("{value}{delimiter}").find(delimiter) != Some(value.len())
}

/// Convert a row of cells to a CSV line (without the line terminator).
pub fn cells_to_csv_line<'c, I>(cells: I, format: &FieldFormat<'_>) -> String
where
    I: IntoIterator<Item = &'c Cell>,
{
    let values: Vec<String> = cells
        .into_iter()
        .map(|cell| {
            let csv_val = CsvValue::from_cell(cell, format.culture, format.null_replacement);
            quote_field(csv_val.as_str(), format.delimiter, format.quote_style).into_owned()
        })
        .collect();
    values.join(format.delimiter)
}
