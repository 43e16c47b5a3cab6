//! Column type tags for csv-table.
//!
//! This module defines `ColumnType`, the closed set of target types a raw CSV
//! field can be coerced into when a column specification is supplied.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Target type for a column.
///
/// Every variant corresponds to exactly one [`Cell`](crate::Cell) variant
/// (besides `Null`, which any column may hold).
///
/// # YAML Format
///
/// Types are specified as snake_case strings:
/// ```yaml
/// type: int
/// type: decimal
/// type: date_time
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnType {
    /// Text, kept as-is
    #[default]
    String,

    /// 32-bit signed integer
    Int,

    /// 64-bit signed integer
    Long,

    /// Exact decimal
    Decimal,

    /// 64-bit IEEE 754 floating point
    Double,

    /// `true` / `false`
    Boolean,

    /// Date and time of day
    DateTime,

    /// Exactly one character
    Char,
}

impl ColumnType {
    /// Canonical tag used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Long => "long",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::DateTime => "date_time",
            Self::Char => "char",
        }
    }

    /// Parse a type tag, accepting the common aliases.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "string" | "text" => Some(Self::String),
            "int" | "int32" => Some(Self::Int),
            "long" | "int64" | "big_int" | "bigint" => Some(Self::Long),
            "decimal" => Some(Self::Decimal),
            "double" | "float64" => Some(Self::Double),
            "boolean" | "bool" => Some(Self::Boolean),
            "date_time" | "datetime" => Some(Self::DateTime),
            "char" | "character" => Some(Self::Char),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ColumnType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};

        struct ColumnTypeVisitor;

        impl<'de> Visitor<'de> for ColumnTypeVisitor {
            type Value = ColumnType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a column type name such as \"int\" or \"date_time\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                ColumnType::from_tag(value)
                    .ok_or_else(|| E::custom(format!("unknown column type: {value}")))
            }
        }

        deserializer.deserialize_str(ColumnTypeVisitor)
    }
}
