//! Fitting tokenized records to the header width.

use crate::error::{CsvError, Result};
use crate::tokenizer::Record;
use tracing::debug;

/// What to do with a record shorter than the header list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    #[default]
    FailFast,
    TreatAsNull,
}

impl MissingFieldPolicy {
    pub fn from_flag(treat_missing_fields_as_nulls: bool) -> Self {
        if treat_missing_fields_as_nulls {
            Self::TreatAsNull
        } else {
            Self::FailFast
        }
    }

    /// Fit `record` to exactly `width` slots.
    ///
    /// Missing trailing fields become `None` under `TreatAsNull`; extra fields
    /// are dropped under both policies. `row` is the 1-based data row number.
    pub fn fit(self, record: Record, width: usize, row: usize) -> Result<Vec<Option<String>>> {
        let found = record.fields.len();

        if found < width && self == Self::FailFast {
            return Err(CsvError::MissingField {
                row,
                line: record.line,
                expected: width,
                found,
            });
        }

        if found > width {
            debug!(row, line = record.line, found, expected = width, "Truncating extra fields");
        } else if found < width {
            debug!(row, line = record.line, found, expected = width, "Padding missing fields with nulls");
        }

        let mut fields: Vec<Option<String>> =
            record.fields.into_iter().take(width).map(Some).collect();
        fields.resize(width, None);
        Ok(fields)
    }
}
