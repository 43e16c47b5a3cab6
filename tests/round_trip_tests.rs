use csv_table::{create, parse, CreateInput, CreateOptions, ParseInput, ParseOptions};
use rust_decimal::Decimal;
use std::str::FromStr;
use table_core::{Cell, ColumnSpecification, ColumnType, Row};

fn awkward_values() -> Vec<&'static str> {
    vec![
        "plain",
        "with;delimiter",
        "with \"quotes\"",
        "\"starts with quote",
        "multi\nline",
        "crlf\r\nline",
        ";",
        "\"\"",
        "ends;",
    ]
}

#[test]
fn test_escape_mode_quoting_is_idempotent() {
    let rows: Vec<Row> = awkward_values()
        .into_iter()
        .map(|v| vec![Cell::from(v), Cell::from("tail")])
        .collect();
    let headers = vec!["value".to_string(), "other".to_string()];

    let written = create(
        &CreateInput::list(";", headers.clone(), rows.clone()),
        &CreateOptions::default(),
    )
    .unwrap();

    let table = parse(&ParseInput::new(written.csv, ";"), &ParseOptions::default()).unwrap();
    assert_eq!(table.headers(), headers.as_slice());
    assert_eq!(table.data(), rows.as_slice());
}

#[test]
fn test_multi_character_delimiter_round_trip() {
    let options = ParseOptions {
        contains_header_row: false,
        ..Default::default()
    };
    let first = parse(&ParseInput::new("\"a|\"||b", "||"), &options).unwrap();
    assert_eq!(first.data(), [vec![Cell::from("a|"), Cell::from("b")]]);

    let written = create(&CreateInput::from_table(&first, "||"), &CreateOptions::default()).unwrap();
    assert_eq!(written.csv, "Column1||Column2\n\"a|\"||b\n");

    let rows: Vec<Row> = vec![
        vec![Cell::from("a|"), Cell::from("|")],
        vec![Cell::from("|"), Cell::from("b|c")],
    ];
    let headers = vec!["left".to_string(), "right".to_string()];
    let written = create(
        &CreateInput::list("||", headers.clone(), rows.clone()),
        &CreateOptions::default(),
    )
    .unwrap();
    assert_eq!(written.csv, "left||right\n\"a|\"||\"|\"\n\"|\"||b|c\n");

    let table = parse(&ParseInput::new(written.csv, "||"), &ParseOptions::default()).unwrap();
    assert_eq!(table.headers(), headers.as_slice());
    assert_eq!(table.data(), rows.as_slice());
}

#[test]
fn test_escape_mode_output_reads_as_standard_csv() {
    let rows: Vec<Row> = awkward_values()
        .into_iter()
        .map(|v| vec![Cell::from(v), Cell::Int32(7)])
        .collect();
    let written = create(
        &CreateInput::list(",", vec!["value".to_string(), "n".to_string()], rows),
        &CreateOptions::default(),
    )
    .unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(written.csv.as_bytes());
    let read: Vec<(String, String)> = reader
        .records()
        .map(|r| {
            let record = r.unwrap();
            (record[0].to_string(), record[1].to_string())
        })
        .collect();

    assert_eq!(read.len(), awkward_values().len());
    for ((value, n), want) in read.iter().zip(awkward_values()) {
        assert_eq!(value, want);
        assert_eq!(n, "7");
    }
}

#[test]
fn test_standard_csv_parses_identically() {
    let mut writer = csv::WriterBuilder::new().from_writer(vec![]);
    writer.write_record(["name", "note"]).unwrap();
    writer.write_record(["Smith, John", "said \"hi\""]).unwrap();
    writer.write_record(["two\nlines", ""]).unwrap();
    let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();

    let options = ParseOptions {
        skip_empty_rows: false,
        ..Default::default()
    };
    let table = parse(&ParseInput::new(text, ","), &options).unwrap();
    assert_eq!(
        table.data(),
        [
            vec![Cell::from("Smith, John"), Cell::from("said \"hi\"")],
            vec![Cell::from("two\nlines"), Cell::from("")],
        ]
    );
}

#[test]
fn test_typed_round_trip_across_cultures() {
    let csv = "year;make;length;sold\n1997;Ford;2,34;15.9.2008 6.30.41\n2000;Mercury;1 234,5;1.1.2000";
    let columns = vec![
        ColumnSpecification::new("year", ColumnType::Int),
        ColumnSpecification::new("make", ColumnType::String),
        ColumnSpecification::new("length", ColumnType::Decimal),
        ColumnSpecification::new("sold", ColumnType::DateTime),
    ];
    let finnish = ParseOptions {
        culture_info: "fi-FI".to_string(),
        ..Default::default()
    };
    let first = parse(&ParseInput::new(csv, ";").with_columns(columns.clone()), &finnish).unwrap();
    assert_eq!(
        first.data()[1][2],
        Cell::Decimal(Decimal::from_str("1234.5").unwrap())
    );

    for culture in ["", "en-US", "en-GB", "de-DE", "fi-FI"] {
        let written = create(
            &CreateInput::from_table(&first, ";"),
            &CreateOptions {
                culture_info: culture.to_string(),
                ..Default::default()
            },
        )
        .unwrap();

        let reparsed = parse(
            &ParseInput::new(written.csv, ";").with_columns(columns.clone()),
            &ParseOptions {
                culture_info: culture.to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(reparsed.data(), first.data(), "culture {culture:?}");
    }
}

#[test]
fn test_untyped_round_trip_keeps_strings() {
    let csv = "a;b;c\n1;\"x;y\";\n2;;z";
    let options = ParseOptions::default();
    let first = parse(&ParseInput::new(csv, ";"), &options).unwrap();

    let written = create(&CreateInput::from_table(&first, ";"), &CreateOptions::default()).unwrap();
    assert_eq!(written.csv, "a;b;c\n1;\"x;y\";\n2;;z\n");

    let second = parse(&ParseInput::new(written.csv, ";"), &options).unwrap();
    assert_eq!(second.data(), first.data());
}

#[test]
fn test_null_round_trip_with_replacement() {
    let csv = "a,b,c\n1,2";
    let first = parse(
        &ParseInput::new(csv, ","),
        &ParseOptions {
            treat_missing_fields_as_nulls: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(first.data()[0][2], Cell::Null);

    let written = create(
        &CreateInput::from_table(&first, ","),
        &CreateOptions {
            replace_nulls_with: "NULL".to_string(),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(written.csv, "a,b,c\n1,2,NULL\n");
}
