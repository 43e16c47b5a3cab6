//! Culture rules for formatting and parsing numbers and dates.
//!
//! A [`Culture`] is resolved once per operation and passed explicitly to every
//! formatting and parsing call. There is no process-wide culture.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Error resolving a culture name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CultureError {
    /// Name does not match any known culture
    #[error("Unknown culture '{0}'")]
    Unknown(String),
}

/// Locale-specific number and date rules.
///
/// Patterns use chrono's strftime syntax. `%-d`-style specifiers format
/// without padding and parse one or two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Culture {
    name: &'static str,
    decimal_separator: char,
    group_separator: char,
    date_pattern: &'static str,
    time_pattern: &'static str,
    short_time_pattern: &'static str,
}

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

const INVARIANT: Culture = Culture {
    name: "",
    decimal_separator: '.',
    group_separator: ',',
    date_pattern: "%m/%d/%Y",
    time_pattern: "%H:%M:%S",
    short_time_pattern: "%H:%M",
};

const CULTURES: &[Culture] = &[
    Culture {
        name: "en-US",
        decimal_separator: '.',
        group_separator: ',',
        date_pattern: "%-m/%-d/%Y",
        time_pattern: "%-I:%M:%S %p",
        short_time_pattern: "%-I:%M %p",
    },
    Culture {
        name: "en-GB",
        decimal_separator: '.',
        group_separator: ',',
        date_pattern: "%d/%m/%Y",
        time_pattern: "%H:%M:%S",
        short_time_pattern: "%H:%M",
    },
    Culture {
        name: "fi-FI",
        decimal_separator: ',',
        group_separator: NBSP,
        date_pattern: "%-d.%-m.%Y",
        time_pattern: "%-H.%M.%S",
        short_time_pattern: "%-H.%M",
    },
    Culture {
        name: "sv-SE",
        decimal_separator: ',',
        group_separator: NBSP,
        date_pattern: "%Y-%m-%d",
        time_pattern: "%H:%M:%S",
        short_time_pattern: "%H:%M",
    },
    Culture {
        name: "de-DE",
        decimal_separator: ',',
        group_separator: '.',
        date_pattern: "%d.%m.%Y",
        time_pattern: "%H:%M:%S",
        short_time_pattern: "%H:%M",
    },
    Culture {
        name: "fr-FR",
        decimal_separator: ',',
        group_separator: NARROW_NBSP,
        date_pattern: "%d/%m/%Y",
        time_pattern: "%H:%M:%S",
        short_time_pattern: "%H:%M",
    },
    Culture {
        name: "nb-NO",
        decimal_separator: ',',
        group_separator: NBSP,
        date_pattern: "%d.%m.%Y",
        time_pattern: "%H:%M:%S",
        short_time_pattern: "%H:%M",
    },
    Culture {
        name: "da-DK",
        decimal_separator: ',',
        group_separator: '.',
        date_pattern: "%d.%m.%Y",
        time_pattern: "%H.%M.%S",
        short_time_pattern: "%H.%M",
    },
    Culture {
        name: "nl-NL",
        decimal_separator: ',',
        group_separator: '.',
        date_pattern: "%d-%m-%Y",
        time_pattern: "%H:%M:%S",
        short_time_pattern: "%H:%M",
    },
    Culture {
        name: "es-ES",
        decimal_separator: ',',
        group_separator: '.',
        date_pattern: "%d/%m/%Y",
        time_pattern: "%H:%M:%S",
        short_time_pattern: "%H:%M",
    },
    Culture {
        name: "it-IT",
        decimal_separator: ',',
        group_separator: '.',
        date_pattern: "%d/%m/%Y",
        time_pattern: "%H:%M:%S",
        short_time_pattern: "%H:%M",
    },
    Culture {
        name: "ja-JP",
        decimal_separator: '.',
        group_separator: ',',
        date_pattern: "%Y/%m/%d",
        time_pattern: "%H:%M:%S",
        short_time_pattern: "%H:%M",
    },
];

// ISO-8601 forms without an offset, tried after the culture's own patterns.
const ISO_DATETIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const ISO_OFFSET_PATTERNS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

impl Default for Culture {
    fn default() -> Self {
        INVARIANT
    }
}

impl Culture {
    /// The culture-independent rules used when no culture name is given.
    pub fn invariant() -> Self {
        INVARIANT
    }

    /// Resolve a culture by name.
    ///
    /// The empty string is the invariant culture. Matching is
    /// case-insensitive; a neutral two-letter name resolves to its specific
    /// culture (`fi` → `fi-FI`).
    pub fn from_name(name: &str) -> Result<Self, CultureError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(INVARIANT);
        }

        CULTURES
            .iter()
            .find(|c| {
                c.name.eq_ignore_ascii_case(trimmed)
                    || c.name
                        .split('-')
                        .next()
                        .is_some_and(|lang| lang.eq_ignore_ascii_case(trimmed))
            })
            .copied()
            .ok_or_else(|| CultureError::Unknown(name.to_string()))
    }

    /// Canonical culture name; empty for the invariant culture.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Format a decimal with the culture's decimal separator and no grouping.
    pub fn format_decimal(&self, value: &Decimal) -> String {
        self.localize_point(value.to_string())
    }

    /// Format a double using the shortest round-trip representation.
    pub fn format_double(&self, value: f64) -> String {
        if value.is_nan() {
            "NaN".to_string()
        } else if value.is_infinite() {
            if value.is_sign_positive() {
                "Infinity".to_string()
            } else {
                "-Infinity".to_string()
            }
        } else {
            self.localize_point(value.to_string())
        }
    }

    /// Format a date/time as `<short date> <long time>`.
    pub fn format_datetime(&self, value: &NaiveDateTime) -> String {
        value
            .format(&format!("{} {}", self.date_pattern, self.time_pattern))
            .to_string()
    }

    pub fn parse_int32(&self, text: &str) -> Option<i32> {
        text.trim().parse::<i32>().ok()
    }

    pub fn parse_int64(&self, text: &str) -> Option<i64> {
        text.trim().parse::<i64>().ok()
    }

    /// Parse a decimal written with this culture's separators.
    pub fn parse_decimal(&self, text: &str) -> Option<Decimal> {
        let normalized = self.normalize_number(text)?;
        Decimal::from_str(&normalized)
            .or_else(|_| Decimal::from_scientific(&normalized))
            .ok()
    }

    /// Parse a double written with this culture's separators.
    pub fn parse_double(&self, text: &str) -> Option<f64> {
        match text.trim() {
            "NaN" => return Some(f64::NAN),
            "Infinity" => return Some(f64::INFINITY),
            "-Infinity" => return Some(f64::NEG_INFINITY),
            _ => {}
        }
        let normalized = self.normalize_number(text)?;
        normalized.parse::<f64>().ok()
    }

    /// Parse a date/time.
    ///
    /// Tries the culture's date+time, date+short-time and date-only forms,
    /// then ISO-8601 / RFC 3339 (with or without offset, `T` or space
    /// separator, optional fractional seconds, `Z` suffix) and RFC 2822.
    /// Values carrying an offset are converted to UTC.
    pub fn parse_datetime(&self, text: &str) -> Option<NaiveDateTime> {
        let value = text.trim();
        if value.is_empty() {
            return None;
        }

        for time_pattern in [self.time_pattern, self.short_time_pattern] {
            let pattern = format!("{} {}", self.date_pattern, time_pattern);
            if let Ok(dt) = NaiveDateTime::parse_from_str(value, &pattern) {
                return Some(dt);
            }
        }
        if let Some(dt) = parse_date_only(value, self.date_pattern) {
            return Some(dt);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.naive_utc());
        }
        for pattern in ISO_OFFSET_PATTERNS {
            if let Ok(dt) = DateTime::parse_from_str(value, pattern) {
                return Some(dt.naive_utc());
            }
        }

        // A trailing Z is UTC; the remaining text is a plain ISO form.
        let naive = value
            .strip_suffix('Z')
            .or_else(|| value.strip_suffix('z'))
            .unwrap_or(value);
        for pattern in ISO_DATETIME_PATTERNS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(naive, pattern) {
                return Some(dt);
            }
        }
        if let Some(dt) = parse_date_only(naive, "%Y-%m-%d") {
            return Some(dt);
        }

        if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
            return Some(dt.naive_utc());
        }

        None
    }

    fn localize_point(&self, text: String) -> String {
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }

    /// Rewrite culture-formatted number text into Rust's `1234.5` form.
    fn normalize_number(&self, text: &str) -> Option<String> {
        let spaced_groups = matches!(self.group_separator, NBSP | NARROW_NBSP);
        let mut normalized = String::with_capacity(text.len());

        for c in text.trim().chars() {
            if c == self.group_separator || (spaced_groups && c == ' ') {
                continue;
            } else if c == self.decimal_separator {
                normalized.push('.');
            } else if c == '.' {
                return None;
            } else {
                normalized.push(c);
            }
        }

        if normalized.is_empty() {
            None
        } else {
            Some(normalized)
        }
    }
}

fn parse_date_only(value: &str, pattern: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(value, pattern)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_empty_name_is_invariant() {
        let culture = Culture::from_name("").unwrap();
        assert!(culture.is_invariant());
        assert_eq!(culture.decimal_separator(), '.');
    }

    #[test]
    fn test_name_matching() {
        assert_eq!(Culture::from_name("en-us").unwrap().name(), "en-US");
        assert_eq!(Culture::from_name("FI-fi").unwrap().name(), "fi-FI");
        assert_eq!(Culture::from_name("fi").unwrap().name(), "fi-FI");
        assert_eq!(
            Culture::from_name("xx-YY"),
            Err(CultureError::Unknown("xx-YY".to_string()))
        );
    }

    #[test]
    fn test_parse_decimal_finnish() {
        let culture = Culture::from_name("fi-FI").unwrap();
        assert_eq!(
            culture.parse_decimal("2,34"),
            Some(Decimal::from_str("2.34").unwrap())
        );
        assert_eq!(
            culture.parse_decimal("1 234,5"),
            Some(Decimal::from_str("1234.5").unwrap())
        );
        assert_eq!(culture.parse_decimal("2.34"), None);
        assert_eq!(culture.parse_decimal("abc"), None);
    }

    #[test]
    fn test_parse_decimal_german_grouping() {
        let culture = Culture::from_name("de-DE").unwrap();
        assert_eq!(
            culture.parse_decimal("1.234,5"),
            Some(Decimal::from_str("1234.5").unwrap())
        );
    }

    #[test]
    fn test_parse_double_invariant() {
        let culture = Culture::invariant();
        assert_eq!(culture.parse_double("2.38"), Some(2.38));
        assert_eq!(culture.parse_double("1,000.5"), Some(1000.5));
        assert_eq!(culture.parse_double("1e3"), Some(1000.0));
        assert!(culture.parse_double("NaN").unwrap().is_nan());
        assert_eq!(culture.parse_double(""), None);
    }

    #[test]
    fn test_parse_int() {
        let culture = Culture::invariant();
        assert_eq!(culture.parse_int32(" 42 "), Some(42));
        assert_eq!(culture.parse_int32("-7"), Some(-7));
        assert_eq!(culture.parse_int32("4294967296"), None);
        assert_eq!(culture.parse_int64("4294967296"), Some(4294967296));
        assert_eq!(culture.parse_int32("1.5"), None);
    }

    #[test]
    fn test_format_double() {
        let culture = Culture::from_name("fi-FI").unwrap();
        assert_eq!(culture.format_double(2.38), "2,38");
        assert_eq!(culture.format_double(f64::INFINITY), "Infinity");
        assert_eq!(Culture::invariant().format_double(0.1), "0.1");
    }

    #[test]
    fn test_format_datetime_per_culture() {
        let dt = datetime(2000, 1, 1, 0, 0, 0);
        assert_eq!(
            Culture::from_name("fi-FI").unwrap().format_datetime(&dt),
            "1.1.2000 0.00.00"
        );
        assert_eq!(
            Culture::from_name("en-US").unwrap().format_datetime(&dt),
            "1/1/2000 12:00:00 AM"
        );
        assert_eq!(Culture::invariant().format_datetime(&dt), "01/01/2000 00:00:00");
    }

    #[test]
    fn test_parse_datetime_culture_forms() {
        let culture = Culture::from_name("fi-FI").unwrap();
        assert_eq!(
            culture.parse_datetime("15.9.2008 6.30.41"),
            Some(datetime(2008, 9, 15, 6, 30, 41))
        );
        assert_eq!(
            culture.parse_datetime("15.9.2008"),
            Some(datetime(2008, 9, 15, 0, 0, 0))
        );
    }

    #[test]
    fn test_parse_datetime_iso_forms() {
        let culture = Culture::from_name("fi-FI").unwrap();
        assert_eq!(
            culture.parse_datetime("2008-09-15"),
            Some(datetime(2008, 9, 15, 0, 0, 0))
        );
        assert_eq!(
            culture.parse_datetime("2008-05-01 7:34:42Z"),
            Some(datetime(2008, 5, 1, 7, 34, 42))
        );
        assert_eq!(
            culture.parse_datetime("2008-05-01T10:34:42+03:00"),
            Some(datetime(2008, 5, 1, 7, 34, 42))
        );
        let fractional = culture
            .parse_datetime("2009-09-15T06:30:41.7752486")
            .unwrap();
        assert_eq!(fractional.format("%H:%M:%S").to_string(), "06:30:41");
        assert_eq!(
            culture.parse_datetime("Thu, 01 May 2008 07:34:42 GMT"),
            Some(datetime(2008, 5, 1, 7, 34, 42))
        );
        assert_eq!(culture.parse_datetime("not a date"), None);
    }

    #[test]
    fn test_datetime_round_trip_through_format() {
        let dt = datetime(2019, 12, 31, 23, 5, 9);
        for name in ["", "en-US", "en-GB", "fi-FI", "de-DE", "ja-JP"] {
            let culture = Culture::from_name(name).unwrap();
            let text = culture.format_datetime(&dt);
            assert_eq!(culture.parse_datetime(&text), Some(dt), "culture {name:?}");
        }
    }
}
