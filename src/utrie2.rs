//! Serialization of legacy (UTrie2-style) tries.
//!
//! A legacy trie has a 16-bit index array and either 16-bit data stored in the
//! same array right after the index, or a separate 32-bit data array.

use crate::array::{write_array, Values};
use crate::error::{report, Error};
use crate::layout::{FieldDecl, FieldValue, Layout, StructLiteral};
use crate::sink::Sink;
use crate::syntax::Syntax;

/// Where the data of a legacy trie lives.
#[derive(Debug, Clone, Copy)]
pub enum Trie2Data<'a> {
    /// 16-bit data, stored in the index array after `index_length` entries.
    Data16InlineWithIndex,
    /// 32-bit data in its own array.
    Data32Separate(&'a [u32]),
}

/// A legacy trie, already built in memory.
#[derive(Debug, Clone, Copy)]
pub struct Trie2<'a> {
    /// The index array. For 16-bit tries this also holds the data.
    pub index: &'a [u16],
    pub data: Trie2Data<'a>,
    pub index_length: usize,
    pub data_length: usize,
    pub index2_null_offset: u16,
    pub data_null_offset: u16,
    pub initial_value: u32,
    pub error_value: u32,
    pub high_start: u32,
    pub high_value_index: u32,
}

const fn field(name: &'static str, rust_type: &'static str, ends_row: bool) -> FieldDecl {
    FieldDecl {
        name,
        rust_type,
        ends_row,
    }
}

/// The runtime struct of a legacy trie.
/// Everything after `high_value_index` is unused by generated tries and is
/// always written as null, zero or false.
pub static LAYOUT: Layout = Layout {
    c_type: "UTrie2",
    rust_type: "Trie2",
    fields: &[
        field("index", "&'static [u16]", true),
        field("data16", "Option<&'static [u16]>", true),
        field("data32", "Option<&'static [u32]>", true),
        field("index_length", "i32", true),
        field("data_length", "i32", true),
        field("index2_null_offset", "u16", true),
        field("data_null_offset", "u16", true),
        field("initial_value", "u32", true),
        field("error_value", "u32", true),
        field("high_start", "i32", true),
        field("high_value_index", "i32", true),
        field("memory", "Option<&'static [u8]>", false),
        field("length", "i32", false),
        field("is_memory_owned", "bool", false),
        field("padding1", "bool", false),
        field("padding2", "i16", false),
        field("new_trie", "Option<&'static [u8]>", true),
    ],
    trailing_comma: false,
};

/// Write the arrays of `trie`.
///
/// A 16-bit trie produces one array holding index and data, declared with
/// `index_prefix`. A 32-bit trie produces the index array followed by the data
/// array, declared with `data32_prefix`. `postfix` follows every array.
pub fn write_arrays<S: Sink + ?Sized>(
    sink: &mut S,
    index_prefix: Option<&str>,
    data32_prefix: Option<&str>,
    trie: &Trie2<'_>,
    postfix: Option<&str>,
) -> Result<(), Error> {
    let index = Values::U16(trie.index);
    match trie.data {
        Trie2Data::Data16InlineWithIndex => {
            let Some(length) = trie.index_length.checked_add(trie.data_length) else {
                return report(
                    "utrie2::write_arrays",
                    Error::LengthOutOfBounds {
                        length: usize::MAX,
                        available: trie.index.len(),
                    },
                );
            };
            write_array(sink, index_prefix, index, 16, length, postfix)
        }
        Trie2Data::Data32Separate(data32) => {
            write_array(sink, index_prefix, index, 16, trie.index_length, postfix)?;
            write_array(
                sink,
                data32_prefix,
                Values::U32(data32),
                32,
                trie.data_length,
                postfix,
            )
        }
    }
}

/// Build the struct literal for `trie`, whose arrays were written under the
/// names `index_name` and `data32_name`.
pub fn struct_literal(trie: &Trie2<'_>, index_name: &str, data32_name: &str) -> StructLiteral {
    let (data16, data32) = match trie.data {
        Trie2Data::Data16InlineWithIndex => (
            FieldValue::ArrayTail {
                name: index_name.to_string(),
                offset: trie.index_length,
            },
            FieldValue::Null,
        ),
        Trie2Data::Data32Separate(_) => (
            FieldValue::Null,
            FieldValue::OptionalArray(data32_name.to_string()),
        ),
    };
    StructLiteral::new(
        &LAYOUT,
        vec![
            FieldValue::Array(index_name.to_string()),
            data16,
            data32,
            FieldValue::Decimal(trie.index_length as i64),
            FieldValue::Decimal(trie.data_length as i64),
            FieldValue::Hex(u32::from(trie.index2_null_offset)),
            FieldValue::Hex(u32::from(trie.data_null_offset)),
            FieldValue::Hex(trie.initial_value),
            FieldValue::Hex(trie.error_value),
            FieldValue::Hex(trie.high_start),
            FieldValue::Hex(trie.high_value_index),
            FieldValue::Null,
            FieldValue::Decimal(0),
            FieldValue::Bool(false),
            FieldValue::Bool(false),
            FieldValue::Decimal(0),
            FieldValue::Null,
        ],
    )
}

/// Write the struct literal for `trie` between `prefix` and `postfix`.
pub fn write_struct<S: Sink + ?Sized>(
    sink: &mut S,
    syntax: &dyn Syntax,
    prefix: Option<&str>,
    trie: &Trie2<'_>,
    index_name: &str,
    data32_name: &str,
    postfix: Option<&str>,
) -> Result<(), Error> {
    let body = syntax.struct_body(&struct_literal(trie, index_name, data32_name))?;
    if let Some(prefix) = prefix {
        sink.write_text(prefix)?;
    }
    sink.write_text(&body)?;
    if let Some(postfix) = postfix {
        sink.write_text(postfix)?;
    }
    Ok(())
}

/// Write the arrays and struct of `trie` as variables named after `name`.
pub fn write_named<S: Sink + ?Sized>(
    sink: &mut S,
    syntax: &dyn Syntax,
    name: &str,
    trie: &Trie2<'_>,
) -> Result<(), Error> {
    let index_name = syntax.variable_name(name, "_trieIndex");
    let data32_name = syntax.variable_name(name, "_trieData32");
    log::debug!("writing legacy trie {}", name);
    write_arrays(
        sink,
        Some(&syntax.array_prefix(16, &index_name)),
        Some(&syntax.array_prefix(32, &data32_name)),
        trie,
        Some(syntax.array_postfix()),
    )?;
    write_struct(
        sink,
        syntax,
        Some(&syntax.struct_prefix(&LAYOUT, &syntax.variable_name(name, "_trie"))),
        trie,
        &index_name,
        &data32_name,
        Some(syntax.struct_postfix()),
    )
}
