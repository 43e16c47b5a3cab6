//! Command-line interface for csv-table
//!
//! # Usage Examples
//!
//! ## Parse
//! ```bash
//! # Headerless Finnish CSV with typed columns, printed as JSON
//! csv-table parse --input cars.csv --no-header --culture fi-FI \
//!   --column year:int --column make:string --column length:decimal
//!
//! # Skip a two-line banner and print the XML view
//! csv-table parse --input report.csv --skip-rows 2 --format xml
//!
//! # Load defaults from a file, override one flag
//! csv-table parse --input data.csv --options parse.yaml --ignore-quotes
//! ```
//!
//! ## Create
//! ```bash
//! # JSON record array to CSV
//! csv-table create --input-type record-array --input records.json --null-value N/A
//!
//! # Header list plus rows: {"headers": [...], "data": [[...], ...]}
//! echo '{"headers":["a","b"],"data":[["x",null]]}' | csv-table create --force-quote
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use csv_table::{
    create, load_options_file, parse, CreateInput, CreateOptions, ParseInput, ParseOptions,
};
use json_types::json_to_cell;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use table_core::{ColumnSpecification, Row};

#[derive(Parser)]
#[command(name = "csv-table")]
#[command(about = "Convert between delimited text and typed tables")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse CSV text into a table and print one of its views
    Parse {
        /// Input file (default: stdin)
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Field delimiter, may be several characters
        #[arg(long, default_value = ";")]
        delimiter: String,

        /// Options file (yaml, toml or json); flags override its values
        #[arg(long, value_name = "PATH")]
        options: Option<PathBuf>,

        /// YAML list of {name, type} column specifications
        #[arg(long, value_name = "PATH")]
        columns: Option<PathBuf>,

        /// Inline column specification (format: 'name:type'), repeatable
        #[arg(long = "column", value_name = "NAME:TYPE")]
        inline_columns: Vec<String>,

        /// Output view
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[command(flatten)]
        flags: ParseFlags,
    },

    /// Write CSV text from a header list plus rows, or from a JSON record array
    Create {
        /// Input JSON file (default: stdin)
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Shape of the input JSON
        #[arg(long, value_enum, default_value_t = InputType::List)]
        input_type: InputType,

        /// Field delimiter, may be several characters
        #[arg(long, default_value = ";")]
        delimiter: String,

        /// Options file (yaml, toml or json); flags override its values
        #[arg(long, value_name = "PATH")]
        options: Option<PathBuf>,

        #[command(flatten)]
        flags: CreateFlags,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Xml,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputType {
    List,
    RecordArray,
}

#[derive(Parser)]
struct ParseFlags {
    /// The first record is data, not a header row
    #[arg(long)]
    no_header: bool,

    /// Number of raw lines to discard before reading
    #[arg(long, value_name = "N")]
    skip_rows: Option<usize>,

    /// Keep records whose every field is empty
    #[arg(long)]
    keep_empty_rows: bool,

    /// Keep whitespace around unquoted fields
    #[arg(long)]
    no_trim: bool,

    /// Replacement for spaces in header names
    #[arg(long, value_name = "TEXT")]
    header_whitespace: Option<String>,

    /// Culture for numbers and dates (e.g. fi-FI); empty for invariant
    #[arg(long, env = "CSV_TABLE_CULTURE")]
    culture: Option<String>,

    /// Pad short rows with nulls instead of failing
    #[arg(long)]
    missing_as_null: bool,

    /// Treat quote characters as ordinary text
    #[arg(long)]
    ignore_quotes: bool,
}

impl ParseFlags {
    fn apply(self, options: &mut ParseOptions) {
        if self.no_header {
            options.contains_header_row = false;
        }
        if let Some(n) = self.skip_rows {
            options.skip_rows_from_top = n;
        }
        if self.keep_empty_rows {
            options.skip_empty_rows = false;
        }
        if self.no_trim {
            options.trim_output = false;
        }
        if let Some(replacement) = self.header_whitespace {
            options.replace_header_whitespace_with = replacement;
        }
        if let Some(culture) = self.culture {
            options.culture_info = culture;
        }
        if self.missing_as_null {
            options.treat_missing_fields_as_nulls = true;
        }
        if self.ignore_quotes {
            options.ignore_quotes = true;
        }
    }
}

#[derive(Parser)]
struct CreateFlags {
    /// Do not write a header line
    #[arg(long)]
    no_header: bool,

    /// Culture for numbers and dates (e.g. fi-FI); empty for invariant
    #[arg(long, env = "CSV_TABLE_CULTURE")]
    culture: Option<String>,

    /// Never quote fields
    #[arg(long)]
    never_quote: bool,

    /// Quote every field, header included
    #[arg(long)]
    force_quote: bool,

    /// Text written for null values
    #[arg(long, value_name = "TEXT")]
    null_value: Option<String>,
}

impl CreateFlags {
    fn apply(self, options: &mut CreateOptions) {
        if self.no_header {
            options.include_header_row = false;
        }
        if let Some(culture) = self.culture {
            options.culture_info = culture;
        }
        if self.never_quote {
            options.never_add_quotes_around_values = true;
        }
        if self.force_quote {
            options.force_quotes_around_values = true;
        }
        if let Some(null_value) = self.null_value {
            options.replace_nulls_with = null_value;
        }
    }
}

/// `List` payload read by the CLI.
#[derive(Deserialize)]
struct ListPayload {
    headers: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<serde_json::Value>>,
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn load_columns(
    file: Option<&Path>,
    inline: &[String],
) -> anyhow::Result<Vec<ColumnSpecification>> {
    let mut columns = match file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read columns file {}", path.display()))?;
            ColumnSpecification::list_from_yaml(&content)
                .with_context(|| format!("Invalid columns file {}", path.display()))?
        }
        None => vec![],
    };
    for definition in inline {
        columns.push(
            ColumnSpecification::parse_inline(definition)
                .with_context(|| format!("Invalid column definition '{definition}'"))?,
        );
    }
    Ok(columns)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("csv_table=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            delimiter,
            options,
            columns,
            inline_columns,
            format,
            flags,
        } => {
            let mut parse_options: ParseOptions = match options {
                Some(path) => load_options_file(&path)
                    .with_context(|| format!("Failed to load options from {}", path.display()))?,
                None => ParseOptions::default(),
            };
            flags.apply(&mut parse_options);

            let column_specifications = load_columns(columns.as_deref(), &inline_columns)?;
            let csv = read_input(input.as_deref())?;
            let parse_input = ParseInput::new(csv, delimiter.clone()).with_columns(column_specifications);

            let table = parse(&parse_input, &parse_options).context("Parse failed")?;

            match format {
                OutputFormat::Json => {
                    let text = serde_json::to_string_pretty(table.to_json())
                        .context("Failed to serialize JSON view")?;
                    println!("{text}");
                }
                OutputFormat::Xml => println!("{}", table.to_xml()),
                OutputFormat::Csv => {
                    let create_options = CreateOptions {
                        include_header_row: true,
                        culture_info: parse_options.culture_info.clone(),
                        ..Default::default()
                    };
                    let result = create(&CreateInput::from_table(&table, delimiter), &create_options)
                        .context("Create failed")?;
                    print!("{}", result.csv);
                }
            }
        }
        Commands::Create {
            input,
            input_type,
            delimiter,
            options,
            flags,
        } => {
            let mut create_options: CreateOptions = match options {
                Some(path) => load_options_file(&path)
                    .with_context(|| format!("Failed to load options from {}", path.display()))?,
                None => CreateOptions::default(),
            };
            flags.apply(&mut create_options);

            let payload = read_input(input.as_deref())?;
            let create_input = match input_type {
                InputType::RecordArray => CreateInput::record_array(delimiter, payload),
                InputType::List => {
                    let list: ListPayload =
                        serde_json::from_str(&payload).context("Invalid list payload")?;
                    let data: Vec<Row> = list
                        .data
                        .iter()
                        .map(|row| row.iter().map(json_to_cell).collect())
                        .collect();
                    CreateInput::list(delimiter, list.headers, data)
                }
            };

            let result = create(&create_input, &create_options).context("Create failed")?;
            print!("{}", result.csv);
        }
    }

    Ok(())
}
