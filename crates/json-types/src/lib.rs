//! JSON conversions for table-core cells.
//!
//! This crate provides bidirectional conversions between table-core's
//! [`Cell`](table_core::Cell) and JSON values.
//!
//! # Modules
//!
//! - [`forward`] - Cell → JSON value (record-array view)
//! - [`reverse`] - JSON record array → Cells (record-array input for writing)
//!
//! # Example
//!
//! ```
//! use json_types::{parse_record_array, JsonValue};
//! use table_core::{Cell, Culture};
//!
//! // Forward: Cell → JSON value
//! let json = JsonValue::from_cell(&Cell::Int32(42), &Culture::invariant());
//! assert_eq!(json.into_inner(), serde_json::json!(42));
//!
//! // Reverse: JSON record array → ordered records
//! let records = parse_record_array(r#"[{"a": "x", "b": null}]"#).unwrap();
//! assert_eq!(records[0].fields[1], ("b".to_string(), Cell::Null));
//! ```

pub mod forward;
pub mod reverse;

pub use forward::{row_to_json_object, JsonValue};
pub use reverse::{json_to_cell, parse_record_array, JsonConversionError, JsonRecord};
