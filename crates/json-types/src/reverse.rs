//! Reverse conversion: JSON record array → Cells.
//!
//! This module turns a JSON array of objects into ordered records of cells,
//! the input shape for writing CSV from a record array.

use serde_json::Value;
use table_core::Cell;
use thiserror::Error;

/// Errors converting a JSON record array.
#[derive(Debug, Error)]
pub enum JsonConversionError {
    /// Payload is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level value is not an array
    #[error("Expected a JSON array of objects, found {0}")]
    NotAnArray(&'static str),

    /// An array element is not an object
    #[error("Record {index} is not a JSON object (found {found})")]
    RecordNotObject { index: usize, found: &'static str },
}

/// One record of a JSON record array, fields in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord {
    pub fields: Vec<(String, Cell)>,
}

impl JsonRecord {
    /// Field names in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Cells in document order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.fields.iter().map(|(_, v)| v)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convert one JSON value to a cell.
///
/// Numbers keep their literal text (so `1.00` stays `1.00`), nested arrays and
/// objects become compact JSON text.
pub fn json_to_cell(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Null,
        Value::Bool(b) => Cell::Boolean(*b),
        Value::Number(n) => Cell::String(n.to_string()),
        Value::String(s) => Cell::String(s.clone()),
        Value::Array(_) | Value::Object(_) => Cell::String(value.to_string()),
    }
}

/// Parse a JSON array of objects into records.
pub fn parse_record_array(json: &str) -> Result<Vec<JsonRecord>, JsonConversionError> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(JsonConversionError::NotAnArray(kind(&other))),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(obj) => Ok(JsonRecord {
                fields: obj
                    .iter()
                    .map(|(k, v)| (k.clone(), json_to_cell(v)))
                    .collect(),
            }),
            other => Err(JsonConversionError::RecordNotObject {
                index,
                found: kind(other),
            }),
        })
        .collect()
}
