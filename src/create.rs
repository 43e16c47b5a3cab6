//! Rows or JSON records → CSV text.

use crate::dialect::Dialect;
use crate::error::Result;
use crate::options::{CreateInput, CreateInputType, CreateOptions, CreateResult};
use crate::writer::CsvWriter;
use json_types::parse_record_array;
use tracing::{debug, info, warn};

/// Write the input as delimited text.
pub fn create(input: &CreateInput, options: &CreateOptions) -> Result<CreateResult> {
    let dialect = Dialect::for_create(&input.delimiter, options)?;
    debug!(input_type = ?input.input_type, quote_mode = ?dialect.quote_mode, "Creating CSV");

    let mut writer = CsvWriter::new(&dialect, &options.replace_nulls_with);
    match input.input_type {
        CreateInputType::List => write_list(&mut writer, input, options),
        CreateInputType::RecordArray => write_record_array(&mut writer, &input.json, options)?,
    }

    info!(records = writer.records_written(), "Created CSV");
    Ok(CreateResult {
        csv: writer.finish(),
    })
}

fn write_list(writer: &mut CsvWriter<'_>, input: &CreateInput, options: &CreateOptions) {
    if options.include_header_row && !input.data.is_empty() {
        writer.write_record(&input.headers);
    }

    for (index, row) in input.data.iter().enumerate() {
        if !input.headers.is_empty() && row.len() > input.headers.len() {
            warn!(
                row = index + 1,
                fields = row.len(),
                headers = input.headers.len(),
                "Row is longer than the header list"
            );
        }
        writer.write_cells(row);
    }
}

fn write_record_array(
    writer: &mut CsvWriter<'_>,
    json: &str,
    options: &CreateOptions,
) -> Result<()> {
    let records = parse_record_array(json)?;

    if let Some(first) = records.first() {
        if options.include_header_row {
            let headers: Vec<&str> = first.keys().collect();
            writer.write_record(&headers);
        }
    }

    // Each record is written in its own key order
    for record in &records {
        writer.write_cells(record.cells());
    }
    Ok(())
}
