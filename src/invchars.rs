//! Byte arrays holding mostly invariant-character text.
//!
//! Printable bytes are written as character literals so the generated file
//! stays readable, and lines are broken near string boundaries so that a small
//! edit to the source text produces a small diff.

use crate::error::{report, Error};
use crate::sink::Sink;
use crate::syntax::Syntax;

/// Lines are always broken at this column.
const HARD_LIMIT: usize = 32;

/// Past this column, break after a NUL that terminates a string.
const AFTER_TERMINATOR_LIMIT: usize = 24;

/// Past this column, break before a run of control bytes.
const BEFORE_CONTROL_LIMIT: usize = 16;

fn is_printable(byte: u8) -> bool {
    byte >= 0x20
}

/// Decide whether to break the line before writing `cur`, which follows
/// `prev` and `prev2`, when `col` elements have been written since the last
/// break.
fn breaks_before(col: usize, prev2: Option<u8>, prev: u8, cur: u8) -> bool {
    col >= HARD_LIMIT
        || (col >= AFTER_TERMINATOR_LIMIT && prev2.is_some_and(is_printable) && prev == 0)
        || (col >= BEFORE_CONTROL_LIMIT
            && (prev == 0 || is_printable(prev))
            && cur != 0
            && !is_printable(cur))
}

/// Write the first `length` bytes of `bytes` as an array of character literals
/// and numbers.
///
/// Bytes 0x20 through 0x7e are written as character literals, with `'` and `\`
/// escaped. All other bytes, including 0x7f and above, are written as decimal
/// numbers. Line breaks still treat every byte from 0x20 up as printable.
///
/// `prefix` and `postfix` work as in [`write_array`](crate::write_array).
pub fn write_array_of_mostly_inv_chars<S: Sink + ?Sized>(
    sink: &mut S,
    syntax: &dyn Syntax,
    prefix: Option<&str>,
    bytes: &[u8],
    length: usize,
    postfix: Option<&str>,
) -> Result<(), Error> {
    if length > bytes.len() {
        return report(
            "write_array_of_mostly_inv_chars",
            Error::LengthOutOfBounds {
                length,
                available: bytes.len(),
            },
        );
    }
    log::debug!("writing {} invariant-character bytes", length);

    if let Some(prefix) = prefix {
        sink.write_template(prefix, length)?;
    }

    let mut body = String::with_capacity(length * 4);
    let mut col = 0;
    let mut prev2 = None;
    let mut prev = None;
    for &cur in &bytes[..length] {
        if let Some(p) = prev {
            if breaks_before(col, prev2, p, cur) {
                body.push_str(",\n");
                col = 0;
            } else {
                body.push(',');
            }
        }
        match syntax.char_literal(cur) {
            Some(lit) => body.push_str(&lit),
            None => body.push_str(&cur.to_string()),
        }
        prev2 = prev;
        prev = Some(cur);
        col += 1;
    }
    sink.write_text(&body)?;

    if let Some(postfix) = postfix {
        sink.write_text(postfix)?;
    }
    Ok(())
}
