//! Indented XML rendering of a table.
//!
//! Header strings become element names verbatim; callers supply headers that
//! are valid XML names.

use table_core::{Cell, Culture};

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";
const INDENT: &str = "  ";

/// Render rows as `<Root><Row><header>value</header>...</Row>...</Root>`.
///
/// Null cells, including cells missing from a short row, are self-closing.
pub fn table_to_xml(headers: &[String], rows: &[Vec<Cell>], culture: &Culture) -> String {
    let mut out = String::new();
    out.push_str(DECLARATION);
    out.push('\n');

    if rows.is_empty() {
        out.push_str("<Root />");
        return out;
    }

    out.push_str("<Root>\n");
    for row in rows {
        out.push_str(&format!("{INDENT}<Row>\n"));
        for (i, header) in headers.iter().enumerate() {
            let element = match row.get(i).and_then(|cell| cell.format(culture)) {
                Some(text) => format!("<{header}>{}</{header}>", escape_text(&text)),
                None => format!("<{header} />"),
            };
            out.push_str(&format!("{INDENT}{INDENT}{element}\n"));
        }
        out.push_str(&format!("{INDENT}</Row>\n"));
    }
    out.push_str("</Root>");
    out
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
