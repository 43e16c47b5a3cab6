//! Error taxonomy for parse and create operations.
//!
//! Every error is terminal for the operation that raised it: the engine makes
//! a single pass and surfaces the first failure without a partial result.

use crate::options::OptionsError;
use csv_types::CsvParseError;
use json_types::JsonConversionError;
use table_core::CultureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    /// Culture name could not be resolved
    #[error("Invalid culture: {0}")]
    InvalidCulture(#[from] CultureError),

    /// Delimiter is the empty string
    #[error("Delimiter must not be empty")]
    InvalidDelimiter,

    /// No record at all where a header row or first data row is required
    #[error("CSV input is empty: {0}")]
    EmptyInput(&'static str),

    /// Quoted field never closed
    #[error("Unterminated quoted field starting on line {line}")]
    MalformedRecord { line: usize },

    /// Record shorter than the header list under the fail-fast policy
    #[error("Row {row} (line {line}) has {found} fields, expected {expected}")]
    MissingField {
        row: usize,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Field cannot be coerced to its column's type
    #[error("Row {row}, column '{column}': {source}")]
    TypeConversion {
        row: usize,
        column: String,
        #[source]
        source: CsvParseError,
    },

    /// Record-array payload is not a JSON array of objects
    #[error("Invalid record array: {0}")]
    InvalidRecordArray(#[from] JsonConversionError),

    /// Options file could not be loaded
    #[error(transparent)]
    Options(#[from] OptionsError),
}

pub type Result<T> = std::result::Result<T, CsvError>;
