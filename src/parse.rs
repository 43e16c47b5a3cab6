//! CSV text → typed table.

use crate::dialect::Dialect;
use crate::error::{CsvError, Result};
use crate::header::{resolve_headers, HeaderMode};
use crate::missing::MissingFieldPolicy;
use crate::options::{ParseInput, ParseOptions};
use crate::table::TableResult;
use crate::tokenizer::{skip_lines, Tokenizer};
use csv_types::csv_string_to_cell;
use table_core::{Cell, ColumnSpecification, Culture, Row};
use tracing::{debug, info};

/// Parse CSV text into a [`TableResult`].
///
/// The whole input is read in one pass. The first error aborts the operation
/// and no rows are returned.
pub fn parse(input: &ParseInput, options: &ParseOptions) -> Result<TableResult> {
    let dialect = Dialect::for_parse(&input.delimiter, options)?;

    let (text, skipped) = skip_lines(&input.csv, options.skip_rows_from_top);
    if skipped > 0 {
        debug!(skipped, "Discarded lines before tokenizing");
    }

    let mut records = Tokenizer::new(text, &dialect, skipped + 1);
    let resolved = resolve_headers(
        &mut records,
        &input.column_specifications,
        options.contains_header_row,
        &options.replace_header_whitespace_with,
    )?;

    // Padding applies only when the headers come from the data itself
    let policy = match resolved.mode {
        HeaderMode::Specified => MissingFieldPolicy::FailFast,
        HeaderMode::HeaderRow | HeaderMode::Positional => {
            MissingFieldPolicy::from_flag(options.treat_missing_fields_as_nulls)
        }
    };
    debug!(mode = ?resolved.mode, columns = resolved.names.len(), ?policy, "Resolved headers");

    let width = resolved.names.len();
    let mut data = Vec::new();
    for (index, record) in resolved.first_data.map(Ok).into_iter().chain(records).enumerate() {
        let row = index + 1;
        let fields = policy.fit(record?, width, row)?;
        data.push(coerce_row(
            fields,
            &resolved.names,
            &input.column_specifications,
            &dialect.culture,
            row,
        )?);
    }

    info!(rows = data.len(), columns = width, culture = dialect.culture.name(), "Parsed CSV");
    Ok(TableResult::new(data, resolved.names, dialect.culture))
}

fn coerce_row(
    fields: Vec<Option<String>>,
    headers: &[String],
    specifications: &[ColumnSpecification],
    culture: &Culture,
    row: usize,
) -> Result<Row> {
    fields
        .into_iter()
        .enumerate()
        .map(|(i, field)| match (field, specifications.get(i)) {
            (None, _) => Ok(Cell::Null),
            (Some(text), None) => Ok(Cell::String(text)),
            (Some(text), Some(spec)) => csv_string_to_cell(&text, spec.column_type, culture)
                .map_err(|source| CsvError::TypeConversion {
                    row,
                    column: headers[i].clone(),
                    source,
                }),
        })
        .collect()
}
