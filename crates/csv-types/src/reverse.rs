//! Reverse conversion: CSV field text → Cell.
//!
//! This module coerces raw CSV field text into table-core's `Cell` according
//! to a column's declared type and the operation's culture.

use table_core::{Cell, ColumnType, Culture};

/// Error type for CSV field coercion failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvParseError {
    pub message: String,
    pub value: String,
    pub expected_type: String,
}

impl CsvParseError {
    fn new(message: &str, value: &str, expected_type: ColumnType) -> Self {
        Self {
            message: message.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        }
    }
}

impl std::fmt::Display for CsvParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to parse '{}' as {}: {}",
            self.value, self.expected_type, self.message
        )
    }
}

impl std::error::Error for CsvParseError {}

/// Parse a CSV field according to its column type.
///
/// This is the reverse of `CsvValue::from_cell`. Empty text is only valid for
/// `String` columns.
pub fn csv_string_to_cell(
    value: &str,
    column_type: ColumnType,
    culture: &Culture,
) -> Result<Cell, CsvParseError> {
    match column_type {
        ColumnType::String => Ok(Cell::String(value.to_string())),

        ColumnType::Int => culture
            .parse_int32(value)
            .map(Cell::Int32)
            .ok_or_else(|| CsvParseError::new("Invalid integer", value, column_type)),

        ColumnType::Long => culture
            .parse_int64(value)
            .map(Cell::Int64)
            .ok_or_else(|| CsvParseError::new("Invalid long integer", value, column_type)),

        ColumnType::Decimal => culture
            .parse_decimal(value)
            .map(Cell::Decimal)
            .ok_or_else(|| CsvParseError::new("Invalid decimal", value, column_type)),

        ColumnType::Double => culture
            .parse_double(value)
            .map(Cell::Double)
            .ok_or_else(|| CsvParseError::new("Invalid double", value, column_type)),

        // Culture-independent literal match
        ColumnType::Boolean => {
            let trimmed = value.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                Ok(Cell::Boolean(true))
            } else if trimmed.eq_ignore_ascii_case("false") {
                Ok(Cell::Boolean(false))
            } else {
                Err(CsvParseError::new(
                    "Invalid boolean value (expected true or false)",
                    value,
                    column_type,
                ))
            }
        }

        ColumnType::DateTime => culture
            .parse_datetime(value)
            .map(Cell::DateTime)
            .ok_or_else(|| CsvParseError::new("Unrecognized date/time format", value, column_type)),

        ColumnType::Char => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Cell::Character(c)),
                _ => Err(CsvParseError::new(
                    "Expected exactly one character",
                    value,
                    column_type,
                )),
            }
        }
    }
}
