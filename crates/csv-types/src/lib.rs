//! CSV field conversions for table-core cells.
//!
//! This crate provides bidirectional conversions between table-core's
//! [`Cell`](table_core::Cell) and CSV field text.
//!
//! # Modules
//!
//! - [`forward`] - Cell → CSV field text (culture formatting, quoting)
//! - [`reverse`] - CSV field text → Cell (culture-aware coercion)
//!
//! # Example
//!
//! ```
//! use csv_types::{csv_string_to_cell, quote_field, QuoteStyle};
//! use table_core::{Cell, ColumnType, Culture};
//!
//! let culture = Culture::from_name("fi-FI").unwrap();
//!
//! // Reverse: CSV text → Cell
//! let cell = csv_string_to_cell("2,34", ColumnType::Double, &culture).unwrap();
//! assert_eq!(cell, Cell::Double(2.34));
//!
//! // Forward: quoting a field that contains the delimiter
//! assert_eq!(quote_field("Fo;rd", ";", QuoteStyle::Necessary), "\"Fo;rd\"");
//! ```

pub mod forward;
pub mod reverse;

pub use forward::{cells_to_csv_line, quote_field, CsvValue, FieldFormat, QuoteStyle};
pub use reverse::{csv_string_to_cell, CsvParseError};
