//! Target language renderers.
//!
//! The emitters decide *what* is written; a [`Syntax`] decides how arrays,
//! struct literals and character literals are spelled in the target language.

use crate::error::Error;
use crate::layout::{FieldValue, Layout, StructLiteral};
use core::str::FromStr;
use std::fmt;

/// Spelling of generated declarations in one target language.
pub trait Syntax {
    /// The name of a generated variable derived from a base name.
    fn variable_name(&self, base: &str, suffix: &str) -> String;

    /// A declaration prefix for an array of `bits`-wide elements.
    /// The result is a template containing a length placeholder.
    fn array_prefix(&self, bits: u32, name: &str) -> String;

    /// Text that closes an array declaration.
    fn array_postfix(&self) -> &'static str;

    /// A declaration prefix for a struct literal of the given layout.
    fn struct_prefix(&self, layout: &Layout, name: &str) -> String;

    /// Text that closes a struct declaration.
    fn struct_postfix(&self) -> &'static str;

    /// Render a single field value.
    fn value(&self, value: &FieldValue) -> Result<String, Error>;

    /// Render the fields of a struct literal, without prefix and postfix.
    fn struct_body(&self, literal: &StructLiteral) -> Result<String, Error>;

    /// Render a byte as a quoted character literal, or None if it must be
    /// written as a number.
    fn char_literal(&self, byte: u8) -> Option<String>;
}

/// The supported target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    C,
    Rust,
}

impl Language {
    pub fn syntax(self) -> &'static dyn Syntax {
        match self {
            Language::C => &CSyntax,
            Language::Rust => &RustSyntax,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" | "C" => Ok(Language::C),
            "rust" | "Rust" => Ok(Language::Rust),
            _ => Err(format!("invalid language: \"{}\"", s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Language::C => "c",
            Language::Rust => "rust",
        })
    }
}

/// Whether a byte may be written as a quoted character.
/// Control bytes and anything outside 7-bit ASCII are written as numbers.
fn is_quotable(byte: u8) -> bool {
    (0x20..0x7f).contains(&byte)
}

/// C-family syntax, matching the layout of ICU's generated data files.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSyntax;

impl Syntax for CSyntax {
    fn variable_name(&self, base: &str, suffix: &str) -> String {
        format!("{}{}", base, suffix)
    }

    fn array_prefix(&self, bits: u32, name: &str) -> String {
        format!("static const uint{}_t {}[%ld]={{\n", bits, name)
    }

    fn array_postfix(&self) -> &'static str {
        "\n};\n\n"
    }

    fn struct_prefix(&self, layout: &Layout, name: &str) -> String {
        format!("static const {} {}={{\n", layout.c_type, name)
    }

    fn struct_postfix(&self) -> &'static str {
        "};\n\n"
    }

    fn value(&self, value: &FieldValue) -> Result<String, Error> {
        Ok(match value {
            FieldValue::Array(name) | FieldValue::OptionalArray(name) => name.clone(),
            FieldValue::ArrayTail { name, offset } => format!("{}+{}", name, offset),
            FieldValue::DataUnion { name, .. } => format!("{{ {} }}", name),
            FieldValue::Null => "NULL".to_string(),
            FieldValue::Decimal(n) => n.to_string(),
            FieldValue::Hex(n) => format!("0x{:x}", n),
            FieldValue::Bool(true) => "TRUE".to_string(),
            FieldValue::Bool(false) => "FALSE".to_string(),
        })
    }

    fn struct_body(&self, literal: &StructLiteral) -> Result<String, Error> {
        let rows = literal.rows();
        let mut body = String::new();
        for (idx, row) in rows.iter().enumerate() {
            let rendered = row
                .iter()
                .map(|v| self.value(v))
                .collect::<Result<Vec<_>, _>>()?;
            body.push_str("    ");
            body.push_str(&rendered.join(", "));
            if idx + 1 < rows.len() || literal.layout().trailing_comma {
                body.push(',');
            }
            body.push('\n');
        }
        Ok(body)
    }

    fn char_literal(&self, byte: u8) -> Option<String> {
        match byte {
            b'\'' => Some("'\\''".to_string()),
            b'\\' => Some("'\\\\'".to_string()),
            b if is_quotable(b) => Some(format!("'{}'", b as char)),
            _ => None,
        }
    }
}

/// Rust syntax: statics with named-field struct literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustSyntax;

/// Convert a camelCase or snake_case name to SCREAMING_SNAKE_CASE.
fn screaming_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        out.push(c.to_ascii_uppercase());
    }
    out
}

impl Syntax for RustSyntax {
    fn variable_name(&self, base: &str, suffix: &str) -> String {
        screaming_snake(&format!("{}{}", base, suffix))
    }

    fn array_prefix(&self, bits: u32, name: &str) -> String {
        format!(
            "#[rustfmt::skip]\npub(crate) static {}: [u{}; %ld] = [\n",
            name, bits
        )
    }

    fn array_postfix(&self) -> &'static str {
        "\n];\n\n"
    }

    fn struct_prefix(&self, layout: &Layout, name: &str) -> String {
        format!(
            "pub(crate) static {}: {} = {} {{\n",
            name, layout.rust_type, layout.rust_type
        )
    }

    fn struct_postfix(&self) -> &'static str {
        "};\n\n"
    }

    fn value(&self, value: &FieldValue) -> Result<String, Error> {
        Ok(match value {
            FieldValue::Array(name) => format!("&{}", name),
            FieldValue::OptionalArray(name) => format!("Some(&{})", name),
            FieldValue::ArrayTail { name, offset } => {
                format!("Some({}.split_at({}).1)", name, offset)
            }
            FieldValue::DataUnion { name, bits } => match bits {
                8 | 16 | 32 => format!("CodePointTrieData::U{}(&{})", bits, name),
                _ => return Err(Error::InvalidWidth(*bits)),
            },
            FieldValue::Null => "None".to_string(),
            FieldValue::Decimal(n) => n.to_string(),
            FieldValue::Hex(n) => format!("0x{:x}", n),
            FieldValue::Bool(b) => b.to_string(),
        })
    }

    fn struct_body(&self, literal: &StructLiteral) -> Result<String, Error> {
        let mut body = String::new();
        for (decl, value) in literal.fields() {
            body.push_str(&format!("    {}: {},\n", decl.name, self.value(value)?));
        }
        Ok(body)
    }

    fn char_literal(&self, byte: u8) -> Option<String> {
        match byte {
            b'\'' => Some("b'\\''".to_string()),
            b'\\' => Some("b'\\\\'".to_string()),
            b if is_quotable(b) => Some(format!("b'{}'", b as char)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screaming_snake() {
        assert_eq!(screaming_snake("case_trieIndex"), "CASE_TRIE_INDEX");
        assert_eq!(screaming_snake("ulayout_trieData32"), "ULAYOUT_TRIE_DATA32");
        assert_eq!(screaming_snake("inpc_trie"), "INPC_TRIE");
        assert_eq!(screaming_snake("ABC"), "ABC");
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(CSyntax.char_literal(b'H').as_deref(), Some("'H'"));
        assert_eq!(CSyntax.char_literal(b' ').as_deref(), Some("' '"));
        assert_eq!(CSyntax.char_literal(b'\'').as_deref(), Some("'\\''"));
        assert_eq!(CSyntax.char_literal(b'\\').as_deref(), Some("'\\\\'"));
        assert_eq!(CSyntax.char_literal(0), None);
        assert_eq!(CSyntax.char_literal(0x1f), None);
        assert_eq!(CSyntax.char_literal(0x7f), None);
        assert_eq!(CSyntax.char_literal(0xe9), None);
        assert_eq!(RustSyntax.char_literal(b'~').as_deref(), Some("b'~'"));
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("c".parse::<Language>(), Ok(Language::C));
        assert_eq!("rust".parse::<Language>(), Ok(Language::Rust));
        assert!("java".parse::<Language>().is_err());
        assert_eq!(Language::Rust.to_string(), "rust");
    }

    #[test]
    fn test_union_needs_width_in_rust() {
        let bad = FieldValue::DataUnion {
            name: "X".to_string(),
            bits: 0,
        };
        assert!(matches!(RustSyntax.value(&bad), Err(Error::InvalidWidth(0))));
        assert_eq!(CSyntax.value(&bad).unwrap(), "{ X }");
    }
}
