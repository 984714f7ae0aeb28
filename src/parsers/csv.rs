//! Character-level CSV tokenizer.
//!
//! Budget exports quote freely: fields carry embedded commas, doubled-quote
//! escapes, and literal newlines inside quotes. A line split would mangle
//! them, so rows are produced by a single forward pass over the characters.
//!
//! Rules honored:
//! - a leading BOM (`U+FEFF`) is stripped before tokenizing
//! - `"..."` fields may contain commas and newlines verbatim
//! - `""` inside a quoted field is an escaped literal quote
//! - `\r\n` and bare `\n` terminate a row outside quotes; a lone `\r`
//!   does not and stays in the field
//! - residual buffered content with no terminating newline is still
//!   emitted as a final row

/// Tokenize raw CSV text into rows of fields.
///
/// Never fails; malformed input degrades to whatever rows the pass yields.
/// O(n) in character count.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    // Trailing row without a terminating newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Whether a tokenized row is a blank separator line rather than data.
#[must_use]
pub fn is_blank_row(row: &[String]) -> bool {
    row.is_empty() || (row.len() == 1 && row[0].is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_simple_rows() {
        let rows = tokenize("a,b,c\n1,2,3\n");
        assert_eq!(rows, vec![row(&["a", "b", "c"]), row(&["1", "2", "3"])]);
    }

    #[test]
    fn test_crlf_and_bare_lf_both_terminate() {
        let rows = tokenize("a,b\r\n1,2\n3,4");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], row(&["1", "2"]));
        assert_eq!(rows[2], row(&["3", "4"]));
    }

    #[test]
    fn test_quoted_field_with_comma_escape_and_newline() {
        let rows = tokenize("\"Cost, Item\"\"Quoted\"\"\nMultiline\",next\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "Cost, Item\"Quoted\"\nMultiline");
        assert_eq!(rows[0][1], "next");
    }

    #[test]
    fn test_bom_is_stripped() {
        let plain = tokenize("a,b\n1,2\n");
        let bom = tokenize("\u{feff}a,b\n1,2\n");
        assert_eq!(plain, bom);
    }

    #[test]
    fn test_trailing_row_without_newline() {
        let rows = tokenize("a,b\n1,2");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], row(&["1", "2"]));
    }

    #[test]
    fn test_trailing_newline_emits_no_empty_row() {
        let rows = tokenize("a,b\n1,2\n");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_lone_carriage_return_stays_in_field() {
        let rows = tokenize("a\rb,c\n");
        assert_eq!(rows[0], row(&["a\rb", "c"]));
    }

    #[test]
    fn test_empty_fields_preserved() {
        let rows = tokenize("a,,c\n,,\n");
        assert_eq!(rows[0], row(&["a", "", "c"]));
        assert_eq!(rows[1], row(&["", "", ""]));
    }

    #[test]
    fn test_blank_row_detection() {
        assert!(is_blank_row(&[]));
        assert!(is_blank_row(&[String::new()]));
        assert!(!is_blank_row(&row(&["", ""])));
        assert!(!is_blank_row(&row(&["x"])));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\u{feff}").is_empty());
    }
}
