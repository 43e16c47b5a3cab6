//! csv-table
//!
//! Converts between delimited text and typed tables.
//!
//! # Features
//!
//! - Parse: CSV text with any (multi-character) delimiter into typed rows,
//!   with header rows, positional headers or explicit column types
//! - Culture-aware numbers and dates, passed explicitly to every operation
//! - Record-array (JSON) and element (XML) views of a parsed table, computed once
//! - Create: rows of cells or a JSON record array back into CSV text with
//!   escape, force-quote or never-quote policies
//!
//! # Example
//!
//! ```
//! use csv_table::{parse, ParseInput, ParseOptions};
//! use table_core::{Cell, ColumnSpecification, ColumnType};
//!
//! let input = ParseInput::new("1997;Ford;2,34", ";").with_columns(vec![
//!     ColumnSpecification::new("year", ColumnType::Int),
//!     ColumnSpecification::new("make", ColumnType::String),
//!     ColumnSpecification::new("length", ColumnType::Double),
//! ]);
//! let options = ParseOptions {
//!     contains_header_row: false,
//!     culture_info: "fi-FI".to_string(),
//!     ..Default::default()
//! };
//!
//! let table = parse(&input, &options).unwrap();
//! assert_eq!(table.data()[0][0], Cell::Int32(1997));
//! assert_eq!(table.data()[0][2], Cell::Double(2.34));
//! ```

pub mod create;
pub mod dialect;
pub mod error;
pub mod header;
pub mod missing;
pub mod options;
pub mod parse;
pub mod table;
pub mod tokenizer;
pub mod writer;
mod xml;

pub use create::create;
pub use error::{CsvError, Result};
pub use options::{
    load_options_file, CreateInput, CreateInputType, CreateOptions, CreateResult, OptionsError,
    ParseInput, ParseOptions,
};
pub use parse::parse;
pub use table::TableResult;

pub use table_core::{Cell, ColumnSpecification, ColumnType, Culture, Row};
