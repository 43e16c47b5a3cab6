//! Column specifications.
//!
//! A column specification list fully determines header names and coercion
//! types when present, overriding header-row detection.

use crate::types::ColumnType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading column specifications.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Inline `name:type` pair that could not be split or typed
    #[error("Invalid column definition '{0}' (expected name:type)")]
    InvalidDefinition(String),
}

/// Pairs a resulting column name with its target type.
///
/// Specifications map to CSV fields by position: the first specification
/// describes the first field of every record, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpecification {
    /// Name of the resulting column
    pub name: String,

    /// Type for the resulting column
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
}

impl ColumnSpecification {
    /// Create a new column specification.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }

    /// Parse a YAML list of `{name, type}` entries.
    ///
    /// ```yaml
    /// - name: Year
    ///   type: int
    /// - name: Price
    ///   type: decimal
    /// ```
    pub fn list_from_yaml(content: &str) -> Result<Vec<Self>, SchemaError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse an inline `name:type` definition. The split happens at the last
    /// colon so names may contain colons themselves.
    pub fn parse_inline(definition: &str) -> Result<Self, SchemaError> {
        let (name, tag) = definition
            .rsplit_once(':')
            .ok_or_else(|| SchemaError::InvalidDefinition(definition.to_string()))?;
        let column_type = ColumnType::from_tag(tag.trim())
            .ok_or_else(|| SchemaError::InvalidDefinition(definition.to_string()))?;
        Ok(Self::new(name, column_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_from_yaml() {
        let yaml = r#"
- name: Year
  type: int
- name: Car
  type: string
- name: Price
  type: decimal
"#;
        let specs = ColumnSpecification::list_from_yaml(yaml).unwrap();
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0], ColumnSpecification::new("Year", ColumnType::Int));
        assert_eq!(specs[2].column_type, ColumnType::Decimal);
    }

    #[test]
    fn test_missing_type_defaults_to_string() {
        let specs = ColumnSpecification::list_from_yaml("- name: Note").unwrap();
        assert_eq!(specs[0].column_type, ColumnType::String);
    }

    #[test]
    fn test_parse_inline() {
        let spec = ColumnSpecification::parse_inline("Price:decimal").unwrap();
        assert_eq!(spec, ColumnSpecification::new("Price", ColumnType::Decimal));

        let spec = ColumnSpecification::parse_inline("a:b:long").unwrap();
        assert_eq!(spec.name, "a:b");
        assert_eq!(spec.column_type, ColumnType::Long);

        assert!(matches!(
            ColumnSpecification::parse_inline("Price"),
            Err(SchemaError::InvalidDefinition(_))
        ));
        assert!(ColumnSpecification::parse_inline("Price:money").is_err());
    }
}
