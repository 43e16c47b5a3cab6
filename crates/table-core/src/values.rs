//! Value representations for csv-table.
//!
//! This module defines `Cell`, the closed sum type every parsed field and every
//! value handed to the writer is expressed in.

use crate::culture::Culture;
use crate::types::ColumnType;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// A single typed value occupying one row/column position.
///
/// Consumers match on all variants, so adding a type is a compile-time
/// visible change everywhere cells are rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text value
    String(String),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// Exact decimal
    Decimal(Decimal),

    /// 64-bit floating point
    Double(f64),

    /// Boolean value
    Boolean(bool),

    /// Date/time, normalised to UTC when the source carried an offset
    DateTime(NaiveDateTime),

    /// Single character
    Character(char),

    /// Absent value
    Null,
}

/// An ordered sequence of cells, one per resolved header.
pub type Row = Vec<Cell>;

impl Cell {
    /// Create a string cell.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The column type this cell belongs to, `None` for null.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Self::String(_) => Some(ColumnType::String),
            Self::Int32(_) => Some(ColumnType::Int),
            Self::Int64(_) => Some(ColumnType::Long),
            Self::Decimal(_) => Some(ColumnType::Decimal),
            Self::Double(_) => Some(ColumnType::Double),
            Self::Boolean(_) => Some(ColumnType::Boolean),
            Self::DateTime(_) => Some(ColumnType::DateTime),
            Self::Character(_) => Some(ColumnType::Char),
            Self::Null => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            Self::Int32(i) => Some(*i as i64),
            _ => None,
        }
    }

    /// Try to get this value as a decimal.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a date/time.
    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as a character.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Character(c) => Some(*c),
            _ => None,
        }
    }

    /// Render the value as text under `culture`. Null has no text.
    pub fn format(&self, culture: &Culture) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Int32(i) => Some(i.to_string()),
            Self::Int64(i) => Some(i.to_string()),
            Self::Decimal(d) => Some(culture.format_decimal(d)),
            Self::Double(f) => Some(culture.format_double(*f)),
            Self::Boolean(b) => Some(b.to_string()),
            Self::DateTime(dt) => Some(culture.format_datetime(dt)),
            Self::Character(c) => Some(c.to_string()),
            Self::Null => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<Decimal> for Cell {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<char> for Cell {
    fn from(value: char) -> Self {
        Self::Character(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}
