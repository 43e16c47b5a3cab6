//! Parsed table and its derived views.

use crate::xml::table_to_xml;
use json_types::row_to_json_object;
use serde_json::Value;
use std::sync::OnceLock;
use table_core::{Culture, Row};

/// Rows and headers produced by [`parse`](crate::parse), with the culture they
/// were read under.
///
/// The JSON and XML views are computed on first access and cached; later
/// calls return the same value. The cache is safe to share across threads.
#[derive(Debug, Clone)]
pub struct TableResult {
    data: Vec<Row>,
    headers: Vec<String>,
    culture: Culture,
    json: OnceLock<Value>,
    xml: OnceLock<String>,
}

impl TableResult {
    pub fn new(data: Vec<Row>, headers: Vec<String>, culture: Culture) -> Self {
        Self {
            data,
            headers,
            culture,
            json: OnceLock::new(),
            xml: OnceLock::new(),
        }
    }

    pub fn data(&self) -> &[Row] {
        &self.data
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Record-array view: one JSON object per row, keys in header order.
    pub fn to_json(&self) -> &Value {
        self.json.get_or_init(|| {
            Value::Array(
                self.data
                    .iter()
                    .map(|row| Value::Object(row_to_json_object(&self.headers, row, &self.culture)))
                    .collect(),
            )
        })
    }

    /// Element view: an XML document with one `<Row>` per row.
    pub fn to_xml(&self) -> &str {
        self.xml
            .get_or_init(|| table_to_xml(&self.headers, &self.data, &self.culture))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;
    use table_core::Cell;

    fn table() -> TableResult {
        let culture = Culture::from_name("fi-FI").unwrap();
        TableResult::new(
            vec![
                vec![
                    Cell::Int32(1997),
                    Cell::from("Ford"),
                    Cell::Decimal(Decimal::from_str("2.34").unwrap()),
                    Cell::Null,
                ],
                vec![
                    Cell::Int32(2000),
                    Cell::from("Mercury"),
                    Cell::Decimal(Decimal::from_str("2.38").unwrap()),
                    Cell::DateTime(
                        NaiveDate::from_ymd_opt(2000, 1, 1)
                            .unwrap()
                            .and_hms_opt(0, 0, 0)
                            .unwrap(),
                    ),
                ],
            ],
            vec![
                "year".to_string(),
                "make".to_string(),
                "length".to_string(),
                "sold".to_string(),
            ],
            culture,
        )
    }

    #[test]
    fn test_json_view() {
        let table = table();
        assert_eq!(
            table.to_json(),
            &json!([
                {"year": 1997, "make": "Ford", "length": 2.34, "sold": null},
                {"year": 2000, "make": "Mercury", "length": 2.38, "sold": "1.1.2000 0.00.00"}
            ])
        );
    }

    #[test]
    fn test_json_view_key_order() {
        let table = table();
        let keys: Vec<&String> = table.to_json()[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["year", "make", "length", "sold"]);
    }

    #[test]
    fn test_views_are_memoized() {
        let table = table();
        let first = table.to_json() as *const Value;
        let second = table.to_json() as *const Value;
        assert_eq!(first, second);
        assert_eq!(table.to_xml().as_ptr(), table.to_xml().as_ptr());
    }

    #[test]
    fn test_views_are_idempotent() {
        let a = table();
        let b = table();
        assert_eq!(a.to_json(), b.to_json());
        assert_eq!(a.to_xml(), b.to_xml());
    }

    #[test]
    fn test_xml_view_uses_culture() {
        let xml = table().to_xml().to_string();
        assert!(xml.contains("<length>2,34</length>"));
        assert!(xml.contains("<sold />"));
        assert!(xml.contains("<sold>1.1.2000 0.00.00</sold>"));
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TableResult>();

        let table = std::sync::Arc::new(table());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let table = table.clone();
                std::thread::spawn(move || table.to_json().clone())
            })
            .collect();
        for handle in handles {
            assert_eq!(&handle.join().unwrap(), table.to_json());
        }
    }
}
