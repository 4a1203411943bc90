//! The output side of every emitter.

use std::io;

/// An open, ordered text stream that generated source is written to.
///
/// The emitters never open, flush or close a sink; that is up to the caller.
pub trait Sink {
    /// Write text verbatim.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Write a single character.
    fn write_char(&mut self, c: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.write_text(c.encode_utf8(&mut buf))
    }

    /// Write a prefix template with its length placeholder substituted.
    fn write_template(&mut self, template: &str, length: usize) -> io::Result<()> {
        self.write_text(&render_template(template, length))
    }
}

impl<W: io::Write + ?Sized> Sink for W {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.write_all(text.as_bytes())
    }
}

/// Substitute `length` for the first placeholder in `template`.
///
/// Recognized placeholders are `%d`, `%ld`, `%u`, `%lu` and `{}`. `%%` renders
/// as a single `%`. Anything after the first substitution is copied verbatim,
/// except that `%%` keeps collapsing.
pub fn render_template(template: &str, length: usize) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut substituted = false;
    let mut rest = template;
    while let Some(pos) = rest.find(['%', '{']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix("%%") {
            out.push('%');
            rest = after;
            continue;
        }
        let placeholder_len = if substituted {
            None
        } else if tail.starts_with("{}") || tail.starts_with("%d") || tail.starts_with("%u") {
            Some(2)
        } else if tail.starts_with("%ld") || tail.starts_with("%lu") {
            Some(3)
        } else {
            None
        };
        match placeholder_len {
            Some(n) => {
                out.push_str(&length.to_string());
                substituted = true;
                rest = &tail[n..];
            }
            None => {
                out.push_str(&tail[..1]);
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
