//! Numeric array literals.

use crate::error::{report, Error};
use crate::sink::Sink;
use std::fmt::Write;

/// Number of elements written before a line break.
pub const VALUES_PER_LINE: usize = 16;

/// A read-only view of an array of unsigned integers of one width.
#[derive(Debug, Clone, Copy)]
pub enum Values<'a> {
    U8(&'a [u8]),
    U16(&'a [u16]),
    U32(&'a [u32]),
}

impl<'a> Values<'a> {
    /// The element width in bits.
    pub fn bits(&self) -> u32 {
        match self {
            Values::U8(_) => 8,
            Values::U16(_) => 16,
            Values::U32(_) => 32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Values::U8(v) => v.len(),
            Values::U16(v) => v.len(),
            Values::U32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `idx`, widened to u32.
    #[inline]
    fn at(&self, idx: usize) -> u32 {
        match self {
            Values::U8(v) => u32::from(v[idx]),
            Values::U16(v) => u32::from(v[idx]),
            Values::U32(v) => v[idx],
        }
    }
}

impl<'a> From<&'a [u8]> for Values<'a> {
    fn from(v: &'a [u8]) -> Self {
        Values::U8(v)
    }
}

impl<'a> From<&'a [u16]> for Values<'a> {
    fn from(v: &'a [u16]) -> Self {
        Values::U16(v)
    }
}

impl<'a> From<&'a [u32]> for Values<'a> {
    fn from(v: &'a [u32]) -> Self {
        Values::U32(v)
    }
}

/// Check that `width` is one of the supported element widths.
pub fn check_width(width: u32) -> Result<(), Error> {
    match width {
        8 | 16 | 32 => Ok(()),
        _ => Err(Error::InvalidWidth(width)),
    }
}

/// Format a single array element.
/// Values up to 9 are decimal, anything larger is lowercase hex.
pub fn format_value(value: u32) -> String {
    let mut out = String::new();
    push_value(&mut out, value);
    out
}

fn push_value(out: &mut String, value: u32) {
    // Writing to a String cannot fail.
    let _ = if value <= 9 {
        write!(out, "{}", value)
    } else {
        write!(out, "0x{:x}", value)
    };
}

/// Write the first `length` elements of `values` as a comma-separated list.
///
/// If given, `prefix` is a template whose length placeholder (`%ld`, `{}`, ...)
/// receives `length`. `postfix` is written verbatim. A line break follows every
/// [`VALUES_PER_LINE`] elements, so regenerated files diff cleanly.
///
/// The arguments are validated before anything is written: on an unsupported
/// `width`, a `width` that disagrees with the element type of `values`, or a
/// `length` beyond the end of `values`, the error is logged and returned and the
/// sink is left untouched.
pub fn write_array<S: Sink + ?Sized>(
    sink: &mut S,
    prefix: Option<&str>,
    values: Values<'_>,
    width: u32,
    length: usize,
    postfix: Option<&str>,
) -> Result<(), Error> {
    if let Err(err) = check_width(width) {
        return report("write_array", err);
    }
    if values.bits() != width {
        return report(
            "write_array",
            Error::WidthMismatch {
                width,
                actual: values.bits(),
            },
        );
    }
    if length > values.len() {
        return report(
            "write_array",
            Error::LengthOutOfBounds {
                length,
                available: values.len(),
            },
        );
    }
    log::debug!("writing {} values of width {}", length, width);

    if let Some(prefix) = prefix {
        sink.write_template(prefix, length)?;
    }
    sink.write_text(&format_body(values, length))?;
    if let Some(postfix) = postfix {
        sink.write_text(postfix)?;
    }
    Ok(())
}

fn format_body(values: Values<'_>, length: usize) -> String {
    let mut body = String::with_capacity(length * 5);
    let mut col = 0;
    for idx in 0..length {
        if idx > 0 {
            if col < VALUES_PER_LINE {
                body.push(',');
            } else {
                body.push_str(",\n");
                col = 0;
            }
        }
        push_value(&mut body, values.at(idx));
        col += 1;
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0), "0");
        assert_eq!(format_value(9), "9");
        assert_eq!(format_value(10), "0xa");
        assert_eq!(format_value(0xffff_ffff), "0xffffffff");
    }

    #[test]
    fn test_format_body_wraps() {
        let v: Vec<u8> = (0..17).collect();
        let body = format_body(Values::U8(&v), v.len());
        let lines: Vec<&str> = body.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split(',').filter(|s| !s.is_empty()).count(), 16);
        assert!(lines[0].ends_with(','));
        assert_eq!(lines[1], "0x10");
    }

    #[test]
    fn test_format_body_partial_length() {
        let v: [u16; 4] = [1, 2, 300, 4];
        assert_eq!(format_body(Values::U16(&v), 3), "1,2,0x12c");
        assert_eq!(format_body(Values::U16(&v), 0), "");
    }
}
