//! Serialization of codepoint tries (UCPTrie-style).

use crate::array::{write_array, Values};
use crate::error::Error;
use crate::layout::{FieldDecl, FieldValue, Layout, StructLiteral};
use crate::sink::Sink;
use crate::syntax::Syntax;

/// The trie type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieType {
    Fast,
    Small,
    /// Any other tag, kept as is.
    Other(i8),
}

impl TrieType {
    pub fn from_tag(tag: i8) -> TrieType {
        match tag {
            0 => TrieType::Fast,
            1 => TrieType::Small,
            t => TrieType::Other(t),
        }
    }

    pub fn tag(self) -> i8 {
        match self {
            TrieType::Fast => 0,
            TrieType::Small => 1,
            TrieType::Other(t) => t,
        }
    }
}

/// The value width tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueWidth {
    Bits16,
    Bits32,
    Bits8,
    /// A tag that names no width.
    Unrecognized(i8),
}

impl ValueWidth {
    pub fn from_tag(tag: i8) -> ValueWidth {
        match tag {
            0 => ValueWidth::Bits16,
            1 => ValueWidth::Bits32,
            2 => ValueWidth::Bits8,
            t => ValueWidth::Unrecognized(t),
        }
    }

    pub fn tag(self) -> i8 {
        match self {
            ValueWidth::Bits16 => 0,
            ValueWidth::Bits32 => 1,
            ValueWidth::Bits8 => 2,
            ValueWidth::Unrecognized(t) => t,
        }
    }

    /// The element width in bits, or 0 for an unrecognized tag.
    pub fn bits(self) -> u32 {
        match self {
            ValueWidth::Bits16 => 16,
            ValueWidth::Bits32 => 32,
            ValueWidth::Bits8 => 8,
            ValueWidth::Unrecognized(_) => 0,
        }
    }
}

/// A codepoint trie, already built in memory.
#[derive(Debug, Clone, Copy)]
pub struct CodePointTrie<'a> {
    pub index: &'a [u16],
    pub data: Values<'a>,
    pub index_length: usize,
    pub data_length: usize,
    pub high_start: u32,
    /// `high_start` shifted right by 12, as the runtime stores it.
    pub shifted12_high_start: u16,
    pub trie_type: TrieType,
    pub value_width: ValueWidth,
    pub index3_null_offset: u16,
    pub data_null_offset: u32,
    pub null_value: u32,
}

const fn field(name: &'static str, rust_type: &'static str, ends_row: bool) -> FieldDecl {
    FieldDecl {
        name,
        rust_type,
        ends_row,
    }
}

/// The runtime struct of a codepoint trie.
pub static LAYOUT: Layout = Layout {
    c_type: "UCPTrie",
    rust_type: "CodePointTrie",
    fields: &[
        field("index", "&'static [u16]", true),
        field("data", "CodePointTrieData", true),
        field("index_length", "i32", false),
        field("data_length", "i32", true),
        field("high_start", "i32", false),
        field("shifted12_high_start", "u16", true),
        field("trie_type", "i8", false),
        field("value_width", "i8", true),
        field("reserved32", "u32", false),
        field("reserved16", "u16", true),
        field("index3_null_offset", "u16", false),
        field("data_null_offset", "i32", true),
        field("null_value", "u32", true),
    ],
    trailing_comma: true,
};

/// Write the index array with `index_prefix`, then the data array with
/// `data_prefix`. `postfix` follows both.
///
/// The data width comes from the trie's value width tag. An unrecognized tag
/// resolves to width 0, which fails after the index array has been written.
pub fn write_arrays<S: Sink + ?Sized>(
    sink: &mut S,
    index_prefix: Option<&str>,
    data_prefix: Option<&str>,
    trie: &CodePointTrie<'_>,
    postfix: Option<&str>,
) -> Result<(), Error> {
    write_array(
        sink,
        index_prefix,
        Values::U16(trie.index),
        16,
        trie.index_length,
        postfix,
    )?;
    write_array(
        sink,
        data_prefix,
        trie.data,
        trie.value_width.bits(),
        trie.data_length,
        postfix,
    )
}

/// Build the struct literal for `trie`, whose arrays were written under the
/// names `index_name` and `data_name`.
pub fn struct_literal(
    trie: &CodePointTrie<'_>,
    index_name: &str,
    data_name: &str,
) -> StructLiteral {
    StructLiteral::new(
        &LAYOUT,
        vec![
            FieldValue::Array(index_name.to_string()),
            FieldValue::DataUnion {
                name: data_name.to_string(),
                bits: trie.value_width.bits(),
            },
            FieldValue::Decimal(trie.index_length as i64),
            FieldValue::Decimal(trie.data_length as i64),
            FieldValue::Hex(trie.high_start),
            FieldValue::Hex(u32::from(trie.shifted12_high_start)),
            FieldValue::Decimal(i64::from(trie.trie_type.tag())),
            FieldValue::Decimal(i64::from(trie.value_width.tag())),
            FieldValue::Decimal(0),
            FieldValue::Decimal(0),
            FieldValue::Hex(u32::from(trie.index3_null_offset)),
            FieldValue::Hex(trie.data_null_offset),
            FieldValue::Hex(trie.null_value),
        ],
    )
}

/// Write the struct literal for `trie` between `prefix` and `postfix`.
pub fn write_struct<S: Sink + ?Sized>(
    sink: &mut S,
    syntax: &dyn Syntax,
    prefix: Option<&str>,
    trie: &CodePointTrie<'_>,
    index_name: &str,
    data_name: &str,
    postfix: Option<&str>,
) -> Result<(), Error> {
    let body = syntax.struct_body(&struct_literal(trie, index_name, data_name))?;
    if let Some(prefix) = prefix {
        sink.write_text(prefix)?;
    }
    sink.write_text(&body)?;
    if let Some(postfix) = postfix {
        sink.write_text(postfix)?;
    }
    Ok(())
}

/// Write the arrays and struct of `trie` as variables named after `name`:
/// `<name>_trieIndex`, `<name>_trieData` and `<name>_trie`, spelled the way
/// `syntax` spells variable names.
pub fn write_named<S: Sink + ?Sized>(
    sink: &mut S,
    syntax: &dyn Syntax,
    name: &str,
    trie: &CodePointTrie<'_>,
) -> Result<(), Error> {
    let index_name = syntax.variable_name(name, "_trieIndex");
    let data_name = syntax.variable_name(name, "_trieData");
    log::debug!("writing codepoint trie {}", name);
    write_arrays(
        sink,
        Some(&syntax.array_prefix(16, &index_name)),
        Some(&syntax.array_prefix(trie.value_width.bits(), &data_name)),
        trie,
        Some(syntax.array_postfix()),
    )?;
    write_struct(
        sink,
        syntax,
        Some(&syntax.struct_prefix(&LAYOUT, &syntax.variable_name(name, "_trie"))),
        trie,
        &index_name,
        &data_name,
        Some(syntax.struct_postfix()),
    )
}
