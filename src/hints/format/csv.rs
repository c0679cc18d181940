//! # Permissive CSV parsing
//!
//! A single-pass scanner with two modes:
//!
//! - **Unquoted**: `"` enters quoted mode, `,` ends the field, a line break
//!   ends the field and the row, anything else is field content. CRLF, lone
//!   CR and LF are all one line break.
//! - **Quoted**: `""` is a literal quote, a lone `"` leaves quoted mode, and
//!   everything else (delimiters included) is field content.
//!
//! A quote in the middle of an unquoted field switches to quoted mode at that
//! point rather than being taken literally. An unterminated quote consumes the
//! rest of the input. Parsing never fails.

use log::trace;

use crate::hints::types::models::Row;

/// Parse CSV text into rows of fields.
pub fn parse(text: &str) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    let mut row: Row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
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
            // CRLF: the LF ends the row.
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    // Flush a final row without a trailing newline, but never emit an
    // empty row for input that already ended on a boundary.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    trace!("Parsed {} CSV rows (unterminated quote: {})", rows.len(), in_quotes);
    rows
}
