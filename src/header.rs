//! Header resolution: explicit column names, a header row, or positional names.

use crate::error::{CsvError, Result};
use crate::options::NO_HEADER_REPLACEMENT;
use crate::tokenizer::Record;
use table_core::ColumnSpecification;
use tracing::debug;

/// Where the header names came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// Names and types fixed by column specifications
    Specified,
    /// Names read from the first record
    HeaderRow,
    /// `Column1..ColumnN` synthesized from the first data record
    Positional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHeaders {
    pub mode: HeaderMode,
    pub names: Vec<String>,
    /// First data record, already consumed from the stream in positional mode
    pub first_data: Option<Record>,
}

/// Resolve headers, consuming the header row (if any) from `records`.
pub fn resolve_headers<I>(
    records: &mut I,
    specifications: &[ColumnSpecification],
    contains_header_row: bool,
    whitespace_replacement: &str,
) -> Result<ResolvedHeaders>
where
    I: Iterator<Item = Result<Record>>,
{
    if !specifications.is_empty() {
        if contains_header_row {
            if let Some(skipped) = records.next().transpose()? {
                debug!(line = skipped.line, "Skipping header row, column specifications win");
            }
        }
        return Ok(ResolvedHeaders {
            mode: HeaderMode::Specified,
            names: specifications.iter().map(|s| s.name.clone()).collect(),
            first_data: None,
        });
    }

    if contains_header_row {
        let header = records
            .next()
            .transpose()?
            .ok_or(CsvError::EmptyInput("expected a header row"))?;
        let names = header
            .fields
            .iter()
            .map(|v| transform_header(v, whitespace_replacement))
            .collect();
        return Ok(ResolvedHeaders {
            mode: HeaderMode::HeaderRow,
            names,
            first_data: None,
        });
    }

    let first = records
        .next()
        .transpose()?
        .ok_or(CsvError::EmptyInput("expected at least one record"))?;
    Ok(ResolvedHeaders {
        mode: HeaderMode::Positional,
        names: positional_headers(first.fields.len()),
        first_data: Some(first),
    })
}

/// Apply the header whitespace replacement to one header value.
///
/// The single-space sentinel leaves the value unchanged.
pub fn transform_header(value: &str, replacement: &str) -> String {
    if replacement == NO_HEADER_REPLACEMENT {
        return value.to_string();
    }
    if value.trim().is_empty() {
        return replacement.to_string();
    }
    value.replace(' ', replacement)
}

pub fn positional_headers(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Column{i}")).collect()
}
