//! Splits CSV text into records of raw string fields.
//!
//! Quoted fields may contain the delimiter and line breaks; `""` inside a
//! quoted field is one literal quote. With quotes ignored, quote characters
//! are ordinary text. Line breaks are `\n`, `\r\n` or a lone `\r`.

use crate::dialect::{BlankLinePolicy, Dialect};
use crate::error::{CsvError, Result};
use tracing::trace;

/// One tokenized record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line in the original text where the record starts
    pub line: usize,
    pub fields: Vec<String>,
}

impl Record {
    /// A record is blank when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.is_empty())
    }
}

/// Discard the first `count` raw lines, ignoring quoting.
///
/// Returns the remaining text and the number of lines actually discarded.
pub fn skip_lines(text: &str, count: usize) -> (&str, usize) {
    let bytes = text.as_bytes();
    let mut pos = 0;
    let mut skipped = 0;

    while skipped < count && pos < bytes.len() {
        match bytes[pos] {
            b'\n' => {
                pos += 1;
                skipped += 1;
            }
            b'\r' => {
                pos += 1;
                if bytes.get(pos) == Some(&b'\n') {
                    pos += 1;
                }
                skipped += 1;
            }
            _ => pos += 1,
        }
    }

    // A final line without a terminator still counts as read
    if skipped < count && pos == bytes.len() && !text.is_empty() && !text.ends_with(['\n', '\r'])
    {
        skipped += 1;
    }

    (&text[pos..], skipped)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldEnd {
    Delimiter,
    Record,
    Input,
}

/// Lazy, single-pass record iterator over a text buffer.
///
/// Yields at most one error, after which it is exhausted.
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
    dialect: &'a Dialect,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    /// `first_line` is the 1-based line number of the start of `text` in the
    /// original input, used for error reporting.
    pub fn new(text: &'a str, dialect: &'a Dialect, first_line: usize) -> Self {
        Self {
            text,
            pos: 0,
            line: first_line,
            dialect,
            done: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn read_record(&mut self) -> Result<Record> {
        let line = self.line;
        let mut fields = Vec::new();

        loop {
            let (field, end) = self.read_field()?;
            fields.push(field);
            if end != FieldEnd::Delimiter {
                break;
            }
        }

        Ok(Record { line, fields })
    }

    fn read_field(&mut self) -> Result<(String, FieldEnd)> {
        if self.dialect.honors_quotes() {
            let lead = if self.dialect.trims() {
                self.leading_whitespace_len()
            } else {
                0
            };
            if self.rest()[lead..].starts_with('"') {
                self.pos += lead + 1;
                return self.read_quoted_field();
            }
        }

        let (raw, end) = self.scan_unquoted();
        let value = if self.dialect.trims() { raw.trim() } else { raw };
        Ok((value.to_string(), end))
    }

    /// Bytes of inline whitespace at the cursor, stopping at the delimiter so
    /// whitespace delimiters such as a tab survive trimming.
    fn leading_whitespace_len(&self) -> usize {
        let rest = self.rest();
        let mut len = 0;
        for (i, c) in rest.char_indices() {
            let at_delimiter = rest[i..].starts_with(self.dialect.delimiter.as_str());
            if c == '\n' || c == '\r' || !c.is_whitespace() || at_delimiter {
                break;
            }
            len = i + c.len_utf8();
        }
        len
    }

    /// Consume text up to and including the next delimiter or line break.
    fn scan_unquoted(&mut self) -> (&'a str, FieldEnd) {
        let text = self.text;
        let dialect = self.dialect;
        let delimiter = dialect.delimiter.as_str();
        let start = self.pos;

        while self.pos < text.len() {
            let rest = &text[self.pos..];
            if rest.starts_with(delimiter) {
                let field = &text[start..self.pos];
                self.pos += delimiter.len();
                return (field, FieldEnd::Delimiter);
            }
            if rest.starts_with('\n') || rest.starts_with('\r') {
                let field = &text[start..self.pos];
                self.consume_line_break();
                return (field, FieldEnd::Record);
            }
            self.pos += rest.chars().next().map_or(1, char::len_utf8);
        }

        (&text[start..], FieldEnd::Input)
    }

    fn consume_line_break(&mut self) {
        if self.rest().starts_with("\r\n") {
            self.pos += 2;
        } else {
            self.pos += 1;
        }
        self.line += 1;
    }

    /// Read a quoted field; the cursor sits just after the opening quote.
    fn read_quoted_field(&mut self) -> Result<(String, FieldEnd)> {
        let start_line = self.line;
        let mut value = String::new();

        loop {
            let rest = self.rest();
            let Some(idx) = rest.find('"') else {
                return Err(CsvError::MalformedRecord { line: start_line });
            };
            let chunk = &rest[..idx];
            value.push_str(chunk);
            self.line += count_line_breaks(chunk);
            self.pos += idx + 1;

            if self.rest().starts_with('"') {
                value.push('"');
                self.pos += 1;
            } else {
                break;
            }
        }

        // Text between the closing quote and the field end is appended; only
        // its trailing whitespace is subject to trimming
        let (tail, end) = self.scan_unquoted();
        if self.dialect.trims() {
            value.push_str(tail.trim_end());
        } else {
            value.push_str(tail);
        }

        Ok((value, end))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done && self.pos < self.text.len() {
            match self.read_record() {
                Ok(record) => {
                    if self.dialect.blank_lines == BlankLinePolicy::Skip && record.is_blank() {
                        trace!(line = record.line, "Skipping blank record");
                        continue;
                    }
                    return Some(Ok(record));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

fn count_line_breaks(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                count += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            b'\n' => count += 1,
            _ => {}
        }
        i += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;

    fn dialect(delimiter: &str, options: ParseOptions) -> Dialect {
        Dialect::for_parse(delimiter, &options).unwrap()
    }

    fn tokenize(text: &str, dialect: &Dialect) -> Vec<Vec<String>> {
        Tokenizer::new(text, dialect, 1)
            .map(|r| r.unwrap().fields)
            .collect()
    }

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_simple_records() {
        let d = dialect(";", ParseOptions::default());
        let records = tokenize("a;b;c\n1;2;3", &d);
        assert_eq!(records, vec![row(&["a", "b", "c"]), row(&["1", "2", "3"])]);
    }

    #[test]
    fn test_trailing_newline_adds_no_record() {
        let d = dialect(";", ParseOptions::default());
        assert_eq!(tokenize("a;b\r\n", &d), vec![row(&["a", "b"])]);
    }

    #[test]
    fn test_trailing_delimiter_yields_empty_field() {
        let d = dialect(";", ParseOptions::default());
        assert_eq!(tokenize("a;", &d), vec![row(&["a", ""])]);
    }

    #[test]
    fn test_quoted_field_with_delimiter_and_newline() {
        let d = dialect(";", ParseOptions::default());
        let records = tokenize("1997;\"Fo;rd\";\"two\nlines\"\n2000;x;y", &d);
        assert_eq!(records[0], row(&["1997", "Fo;rd", "two\nlines"]));
        assert_eq!(records[1], row(&["2000", "x", "y"]));
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        let d = dialect(",", ParseOptions::default());
        assert_eq!(
            tokenize("\"say \"\"hi\"\"\",x", &d),
            vec![row(&["say \"hi\"", "x"])]
        );
    }

    #[test]
    fn test_unterminated_quote_is_malformed() {
        let d = dialect(",", ParseOptions::default());
        let mut tokenizer = Tokenizer::new("a,b\nc,\"open\nmore", &d, 1);
        assert!(tokenizer.next().unwrap().is_ok());
        match tokenizer.next() {
            Some(Err(CsvError::MalformedRecord { line })) => assert_eq!(line, 2),
            other => panic!("expected malformed record, got {other:?}"),
        }
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn test_ignore_quotes_keeps_quote_characters() {
        let options = ParseOptions {
            ignore_quotes: true,
            ..Default::default()
        };
        let d = dialect(";", options);
        assert_eq!(
            tokenize("year;car\";\"mark", &d),
            vec![row(&["year", "car\"", "\"mark"])]
        );
    }

    #[test]
    fn test_quote_mid_field_is_literal() {
        let d = dialect(";", ParseOptions::default());
        assert_eq!(tokenize("ab\"c;d", &d), vec![row(&["ab\"c", "d"])]);
    }

    #[test]
    fn test_text_after_closing_quote_keeps_inner_space() {
        let d = dialect(";", ParseOptions::default());
        assert_eq!(tokenize("\"x\" y ;z", &d), vec![row(&["x y", "z"])]);
    }

    #[test]
    fn test_trim_policy() {
        let d = dialect(";", ParseOptions::default());
        assert_eq!(
            tokenize("  a ; \" b \" ;c  ", &d),
            vec![row(&["a", " b ", "c"])]
        );

        let no_trim = dialect(
            ";",
            ParseOptions {
                trim_output: false,
                ..Default::default()
            },
        );
        assert_eq!(tokenize(" a ; b", &no_trim), vec![row(&[" a ", " b"])]);
    }

    #[test]
    fn test_whitespace_delimiter_survives_trim() {
        let d = dialect("\t", ParseOptions::default());
        assert_eq!(tokenize("a\t\tb", &d), vec![row(&["a", "", "b"])]);
    }

    #[test]
    fn test_multi_char_delimiter() {
        let d = dialect("||", ParseOptions::default());
        assert_eq!(
            tokenize("a||b|c||\"d||e\"", &d),
            vec![row(&["a", "b|c", "d||e"])]
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let d = dialect(";", ParseOptions::default());
        assert_eq!(
            tokenize("\na;b\n\n;\n   \nc;d", &d),
            vec![row(&["a", "b"]), row(&["c", "d"])]
        );
    }

    #[test]
    fn test_blank_lines_kept() {
        let d = dialect(
            ";",
            ParseOptions {
                skip_empty_rows: false,
                ..Default::default()
            },
        );
        assert_eq!(
            tokenize("a\n\nb", &d),
            vec![row(&["a"]), row(&[""]), row(&["b"])]
        );
    }

    #[test]
    fn test_record_line_numbers() {
        let d = dialect(";", ParseOptions::default());
        let records: Vec<Record> = Tokenizer::new("a\n\"x\ny\"\nb", &d, 3)
            .map(|r| r.unwrap())
            .collect();
        let lines: Vec<usize> = records.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![3, 4, 6]);
    }

    #[test]
    fn test_skip_lines() {
        let (rest, skipped) = skip_lines("banner\nCoolio\nyear;car\n1997;Ford", 2);
        assert_eq!(rest, "year;car\n1997;Ford");
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_skip_lines_ignores_quotes() {
        let (rest, _) = skip_lines("\"open\nnext\nreal", 1);
        assert_eq!(rest, "next\nreal");
    }

    #[test]
    fn test_skip_lines_crlf_and_overrun() {
        let (rest, skipped) = skip_lines("a\r\nb\r\nc", 2);
        assert_eq!(rest, "c");
        assert_eq!(skipped, 2);

        let (rest, skipped) = skip_lines("a\nb", 5);
        assert_eq!(rest, "");
        assert_eq!(skipped, 2);
    }
}
