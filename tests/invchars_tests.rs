#![allow(clippy::uninlined_format_args)]

pub mod common;
use common::*;
use trie_source::{write_array_of_mostly_inv_chars, CSyntax, Error, RustSyntax};

fn render_c(bytes: &[u8]) -> String {
    render(|out| write_array_of_mostly_inv_chars(out, &CSyntax, None, bytes, bytes.len(), None))
}

fn quoted(c: char, n: usize) -> String {
    vec![format!("'{}'", c); n].join(",")
}

#[test]
fn test_text_with_terminator() {
    render_c(&[72, 105, 0, 33]).test_eq("'H','i',0,'!'");
}

#[test]
fn test_control_bytes_are_numbers() {
    render_c(&[b'a', 1, 0x1f, b' ', 0]).test_eq("'a',1,31,' ',0");
}

#[test]
fn test_non_ascii_bytes_are_numbers() {
    render_c(&[b'x', 0xe9, 0x7f]).test_eq("'x',233,127");
}

#[test]
fn test_quote_and_backslash_are_escaped() {
    render_c(b"'\\").test_eq("'\\'','\\\\'");
}

#[test]
fn test_rust_byte_literals() {
    let bytes = [b'H', b'i', 0];
    render(|out| write_array_of_mostly_inv_chars(out, &RustSyntax, None, &bytes, 3, None))
        .test_eq("b'H',b'i',0");
}

#[test]
fn test_prefix_and_postfix() {
    let bytes = b"ab\0";
    render(|out| {
        write_array_of_mostly_inv_chars(
            out,
            &CSyntax,
            Some("static const char names[%ld]={\n"),
            bytes,
            bytes.len(),
            Some("\n};\n"),
        )
    })
    .test_eq("static const char names[3]={\n'a','b',0\n};\n");
}

#[test]
fn test_printable_lines_break_at_32() {
    let text = render_c(&[b'x'; 40]);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(tokens(lines[0]).len(), 32);
    assert_eq!(tokens(lines[1]).len(), 8);

    let text = render_c(&[b'x'; 100]);
    for line in text.lines() {
        assert!(tokens(line).len() <= 32);
    }
}

#[test]
fn test_break_after_terminator() {
    let mut bytes = vec![b'a'; 25];
    bytes.push(0);
    bytes.push(b'b');
    let expected = format!("{},0,\n'b'", quoted('a', 25));
    render_c(&bytes).test_eq(&expected);
}

#[test]
fn test_no_break_after_early_terminator() {
    let mut bytes = vec![b'a'; 20];
    bytes.push(0);
    bytes.push(b'b');
    let expected = format!("{},0,'b'", quoted('a', 20));
    render_c(&bytes).test_eq(&expected);
}

#[test]
fn test_break_before_control_run() {
    let mut bytes = vec![b'a'; 16];
    bytes.extend_from_slice(&[1, 2]);
    let expected = format!("{},\n1,2", quoted('a', 16));
    render_c(&bytes).test_eq(&expected);

    let mut bytes = vec![b'a'; 15];
    bytes.push(1);
    let expected = format!("{},1", quoted('a', 15));
    render_c(&bytes).test_eq(&expected);
}

#[test]
fn test_strings_align_to_lines() {
    // Two NUL-terminated strings: the second one starts on a fresh line.
    let mut bytes = b"abcdefghijklmnopqrstuvwxyz".to_vec();
    bytes.push(0);
    bytes.extend_from_slice(b"next");
    bytes.push(0);
    let text = render_c(&bytes);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("0,"));
    assert_eq!(lines[1], "'n','e','x','t',0");
}

#[test]
fn test_length_out_of_bounds_writes_nothing() {
    let (err, written) = render_err(|out| {
        write_array_of_mostly_inv_chars(out, &CSyntax, Some("x"), b"ab", 3, None)
    });
    assert!(matches!(err, Error::LengthOutOfBounds { .. }));
    assert_eq!(written, "");
}
