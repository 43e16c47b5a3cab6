//! Core types for the csv-table conversion engine.
//!
//! This crate provides the foundational types shared by the format crates:
//!
//! - [`ColumnType`] - Target type tag for a column
//! - [`Cell`] - A single typed value in a row
//! - [`ColumnSpecification`] - Name/type pair that fixes a column's header and coercion
//! - [`Culture`] - Locale rules for formatting and parsing numbers and dates
//!
//! # Architecture
//!
//! ```text
//! table-core (this crate)
//!    │
//!    ├─── csv-types    (Cell <-> CSV field text)
//!    ├─── json-types   (Cell <-> JSON values)
//!    └─── csv-table    (tokenizer, parse/create pipelines)
//! ```
//!
//! # Example
//!
//! ```rust
//! use table_core::{Cell, Culture};
//!
//! let culture = Culture::from_name("fi-FI").unwrap();
//! let cell = Cell::Double(2.5);
//! assert_eq!(cell.format(&culture).as_deref(), Some("2,5"));
//! ```

pub mod culture;
pub mod schema;
pub mod types;
pub mod values;

pub use culture::{Culture, CultureError};
pub use schema::{ColumnSpecification, SchemaError};
pub use types::ColumnType;
pub use values::{Cell, Row};
