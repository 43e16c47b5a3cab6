//! Dialect resolution.
//!
//! Turns user-facing options into the normalized lexical rules one parse or
//! create operation runs under.

use crate::error::{CsvError, Result};
use crate::options::{CreateOptions, ParseOptions};
use csv_types::QuoteStyle;
use table_core::Culture;
use tracing::{debug, warn};

/// How quote characters are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    /// Quotes delimit fields; `""` is a literal quote
    Escape,
    /// Quotes are ordinary characters and are never added on write
    Never,
    /// Every field is quoted on write
    ForceAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimPolicy {
    Trim,
    NoTrim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankLinePolicy {
    Skip,
    Keep,
}

/// Resolved lexical rules for one operation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: String,
    pub quote_mode: QuoteMode,
    pub trim: TrimPolicy,
    pub blank_lines: BlankLinePolicy,
    pub culture: Culture,
}

impl Dialect {
    /// Resolve the dialect for reading.
    pub fn for_parse(delimiter: &str, options: &ParseOptions) -> Result<Self> {
        let dialect = Self {
            delimiter: validate_delimiter(delimiter)?,
            quote_mode: if options.ignore_quotes {
                QuoteMode::Never
            } else {
                QuoteMode::Escape
            },
            trim: if options.trim_output {
                TrimPolicy::Trim
            } else {
                TrimPolicy::NoTrim
            },
            blank_lines: if options.skip_empty_rows {
                BlankLinePolicy::Skip
            } else {
                BlankLinePolicy::Keep
            },
            culture: Culture::from_name(&options.culture_info)?,
        };
        debug!(?dialect, "Resolved parse dialect");
        Ok(dialect)
    }

    /// Resolve the dialect for writing. Trim and blank-line policies do not
    /// apply to output and are fixed to `NoTrim` / `Keep`.
    pub fn for_create(delimiter: &str, options: &CreateOptions) -> Result<Self> {
        let quote_mode = match (
            options.never_add_quotes_around_values,
            options.force_quotes_around_values,
        ) {
            (true, true) => {
                warn!("Both never-quote and force-quote requested; never-quote wins");
                QuoteMode::Never
            }
            (true, false) => QuoteMode::Never,
            (false, true) => QuoteMode::ForceAll,
            (false, false) => QuoteMode::Escape,
        };

        let dialect = Self {
            delimiter: validate_delimiter(delimiter)?,
            quote_mode,
            trim: TrimPolicy::NoTrim,
            blank_lines: BlankLinePolicy::Keep,
            culture: Culture::from_name(&options.culture_info)?,
        };
        debug!(?dialect, "Resolved create dialect");
        Ok(dialect)
    }

    /// Quoting policy applied by the writer.
    pub fn quote_style(&self) -> QuoteStyle {
        match self.quote_mode {
            QuoteMode::Escape => QuoteStyle::Necessary,
            QuoteMode::Never => QuoteStyle::Never,
            QuoteMode::ForceAll => QuoteStyle::Always,
        }
    }

    pub fn trims(&self) -> bool {
        self.trim == TrimPolicy::Trim
    }

    pub fn honors_quotes(&self) -> bool {
        self.quote_mode != QuoteMode::Never
    }
}

fn validate_delimiter(delimiter: &str) -> Result<String> {
    if delimiter.is_empty() {
        return Err(CsvError::InvalidDelimiter);
    }
    Ok(delimiter.to_string())
}
