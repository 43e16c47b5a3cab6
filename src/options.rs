//! Inputs and options for the parse and create operations.
//!
//! Option structs carry their documented defaults through `Default` and
//! `#[serde(default)]`, so a configuration file only needs the keys it changes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use table_core::{ColumnSpecification, Row};
use thiserror::Error;

use crate::table::TableResult;

/// Delimiter used when none is given.
pub const DEFAULT_DELIMITER: &str = ";";

/// Whitespace replacement sentinel meaning "leave header names unchanged".
pub const NO_HEADER_REPLACEMENT: &str = " ";

/// Payload for [`parse`](crate::parse).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseInput {
    /// Input CSV text
    pub csv: String,

    /// Field separator, may be more than one character
    pub delimiter: String,

    /// Positional name/type pairs; when non-empty they fix headers and types
    pub column_specifications: Vec<ColumnSpecification>,
}

impl Default for ParseInput {
    fn default() -> Self {
        Self {
            csv: String::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            column_specifications: vec![],
        }
    }
}

impl ParseInput {
    pub fn new(csv: impl Into<String>, delimiter: impl Into<String>) -> Self {
        Self {
            csv: csv.into(),
            delimiter: delimiter.into(),
            column_specifications: vec![],
        }
    }

    pub fn with_columns(mut self, columns: Vec<ColumnSpecification>) -> Self {
        self.column_specifications = columns;
        self
    }
}

/// Options for [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// First record (after skipped lines) is a header row
    pub contains_header_row: bool,

    /// Raw lines discarded before tokenizing, e.g. metadata banners
    pub skip_rows_from_top: usize,

    /// Drop records whose every field is empty
    pub skip_empty_rows: bool,

    /// Strip surrounding whitespace from unquoted fields
    pub trim_output: bool,

    /// Replacement for spaces in header names; `" "` leaves them unchanged
    pub replace_header_whitespace_with: String,

    /// Culture name for numbers and dates; empty for invariant
    pub culture_info: String,

    /// Pad short records with nulls instead of failing
    pub treat_missing_fields_as_nulls: bool,

    /// Treat quote characters as ordinary text
    pub ignore_quotes: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            contains_header_row: true,
            skip_rows_from_top: 0,
            skip_empty_rows: true,
            trim_output: true,
            replace_header_whitespace_with: NO_HEADER_REPLACEMENT.to_string(),
            culture_info: String::new(),
            treat_missing_fields_as_nulls: false,
            ignore_quotes: false,
        }
    }
}

/// Shape of the payload handed to [`create`](crate::create).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateInputType {
    /// Header list plus rows of cells
    #[default]
    List,

    /// JSON array of objects
    #[serde(alias = "json")]
    RecordArray,
}

/// Payload for [`create`](crate::create).
#[derive(Debug, Clone)]
pub struct CreateInput {
    pub input_type: CreateInputType,

    /// Field separator, may be more than one character
    pub delimiter: String,

    /// Header names for `List` input, in data order
    pub headers: Vec<String>,

    /// Rows for `List` input
    pub data: Vec<Row>,

    /// JSON text for `RecordArray` input
    pub json: String,
}

impl Default for CreateInput {
    fn default() -> Self {
        Self {
            input_type: CreateInputType::List,
            delimiter: DEFAULT_DELIMITER.to_string(),
            headers: vec![],
            data: vec![],
            json: String::new(),
        }
    }
}

impl CreateInput {
    /// List input from headers and rows.
    pub fn list(delimiter: impl Into<String>, headers: Vec<String>, data: Vec<Row>) -> Self {
        Self {
            input_type: CreateInputType::List,
            delimiter: delimiter.into(),
            headers,
            data,
            json: String::new(),
        }
    }

    /// Record-array input from JSON text.
    pub fn record_array(delimiter: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            input_type: CreateInputType::RecordArray,
            delimiter: delimiter.into(),
            json: json.into(),
            ..Default::default()
        }
    }

    /// List input holding a copy of a parsed table.
    pub fn from_table(table: &TableResult, delimiter: impl Into<String>) -> Self {
        Self::list(delimiter, table.headers().to_vec(), table.data().to_vec())
    }
}

/// Options for [`create`](crate::create).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOptions {
    /// Write a header line when there is at least one data row
    pub include_header_row: bool,

    /// Culture name for numbers and dates; empty for invariant
    pub culture_info: String,

    /// Never wrap fields in quotes, even when ambiguous
    pub never_add_quotes_around_values: bool,

    /// Wrap every field in quotes, header included
    pub force_quotes_around_values: bool,

    /// Text written in place of null values
    pub replace_nulls_with: String,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            include_header_row: true,
            culture_info: String::new(),
            never_add_quotes_around_values: false,
            force_quotes_around_values: false,
            replace_nulls_with: String::new(),
        }
    }
}

/// Result of [`create`](crate::create).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateResult {
    pub csv: String,
}

impl CreateResult {
    pub fn into_inner(self) -> String {
        self.csv
    }
}

/// Errors loading an options file.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported options file extension: {0} (expected yaml, yml, toml or json)")]
    UnsupportedFormat(String),
}

/// Load options from a YAML, TOML or JSON file, chosen by extension.
pub fn load_options_file<T: DeserializeOwned>(path: &Path) -> Result<T, OptionsError> {
    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
        "toml" => Ok(toml::from_str(&content)?),
        "json" => Ok(serde_json::from_str(&content)?),
        other => Err(OptionsError::UnsupportedFormat(other.to_string())),
    }
}
