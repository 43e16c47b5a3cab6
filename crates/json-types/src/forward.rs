//! Forward conversion: Cell → JSON value.
//!
//! This module provides conversion from table-core's `Cell` to JSON values
//! for the record-array view of a parsed table.

use serde_json::{json, Map, Number, Value};
use std::str::FromStr;
use table_core::{Cell, Culture};

/// Wrapper for JSON values.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonValue(pub Value);

impl JsonValue {
    /// Convert a cell to its native JSON scalar.
    ///
    /// Numbers become JSON numbers, booleans JSON booleans and null JSON null.
    /// Date/times and characters are rendered as culture-formatted strings.
    pub fn from_cell(cell: &Cell, culture: &Culture) -> Self {
        match cell {
            Cell::Null => JsonValue(Value::Null),

            Cell::Boolean(b) => JsonValue(json!(*b)),

            Cell::Int32(i) => JsonValue(json!(*i)),
            Cell::Int64(i) => JsonValue(json!(*i)),

            // Go through the decimal's own text so no binary rounding sneaks in
            Cell::Decimal(d) => match Number::from_str(&d.to_string()) {
                Ok(n) => JsonValue(Value::Number(n)),
                Err(_) => JsonValue(json!(culture.format_decimal(d))),
            },

            // NaN and infinities have no JSON number form
            Cell::Double(f) => match Number::from_f64(*f) {
                Some(n) => JsonValue(Value::Number(n)),
                None => JsonValue(json!(culture.format_double(*f))),
            },

            Cell::String(s) => JsonValue(json!(s)),
            Cell::Character(c) => JsonValue(json!(c.to_string())),
            Cell::DateTime(dt) => JsonValue(json!(culture.format_datetime(dt))),
        }
    }

    /// Get the inner JSON value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Convert one row into a JSON object keyed by header, in header order.
///
/// Missing trailing cells are written as null. A repeated header keeps its
/// first position and takes the later value.
pub fn row_to_json_object(headers: &[String], row: &[Cell], culture: &Culture) -> Map<String, Value> {
    let mut obj = Map::with_capacity(headers.len());
    for (i, header) in headers.iter().enumerate() {
        let value = row
            .get(i)
            .map(|cell| JsonValue::from_cell(cell, culture).into_inner())
            .unwrap_or(Value::Null);
        obj.insert(header.clone(), value);
    }
    obj
}
