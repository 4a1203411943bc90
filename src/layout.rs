//! Declarative field tables for trie struct literals.
//!
//! Each trie layout lists its runtime fields in declaration order. A
//! [`StructLiteral`] pairs that list with one value per field, so the order and
//! the placeholder values can be checked without rendering any text.

/// The value of one struct field, independent of the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A reference to a generated array.
    Array(String),
    /// A reference to a generated array, in a field that may be null.
    OptionalArray(String),
    /// The tail of a generated array starting `offset` elements in, in a field
    /// that may be null.
    ArrayTail { name: String, offset: usize },
    /// The codepoint trie data union wrapping a generated array of `bits`-wide
    /// elements.
    DataUnion { name: String, bits: u32 },
    Null,
    Decimal(i64),
    Hex(u32),
    Bool(bool),
}

/// One field of a runtime struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name as used by the Rust runtime types.
    pub name: &'static str,
    /// Field type as used by the Rust runtime types.
    pub rust_type: &'static str,
    /// Whether the C rendering starts a new line after this field.
    pub ends_row: bool,
}

/// The shape of a runtime struct.
#[derive(Debug, PartialEq, Eq)]
pub struct Layout {
    pub c_type: &'static str,
    pub rust_type: &'static str,
    pub fields: &'static [FieldDecl],
    /// Whether the C rendering puts a comma after the last field.
    pub trailing_comma: bool,
}

/// A struct literal: a layout plus one value per field.
#[derive(Debug, Clone)]
pub struct StructLiteral {
    layout: &'static Layout,
    values: Vec<FieldValue>,
}

impl StructLiteral {
    pub(crate) fn new(layout: &'static Layout, values: Vec<FieldValue>) -> StructLiteral {
        debug_assert_eq!(layout.fields.len(), values.len(), "Wrong number of values");
        StructLiteral { layout, values }
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// Iterate over (field, value) pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDecl, &FieldValue)> + '_ {
        self.layout.fields.iter().zip(self.values.iter())
    }

    /// Look up the value of a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields()
            .find(|(decl, _)| decl.name == name)
            .map(|(_, value)| value)
    }

    /// Group fields into the rows of the C rendering.
    pub fn rows(&self) -> Vec<Vec<&FieldValue>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        for (decl, value) in self.fields() {
            row.push(value);
            if decl.ends_row {
                rows.push(std::mem::take(&mut row));
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIR: Layout = Layout {
        c_type: "Pair",
        rust_type: "Pair",
        fields: &[
            FieldDecl {
                name: "a",
                rust_type: "u32",
                ends_row: false,
            },
            FieldDecl {
                name: "b",
                rust_type: "u32",
                ends_row: true,
            },
            FieldDecl {
                name: "c",
                rust_type: "bool",
                ends_row: false,
            },
        ],
        trailing_comma: true,
    };

    #[test]
    fn test_rows_and_lookup() {
        let lit = StructLiteral::new(
            &PAIR,
            vec![
                FieldValue::Decimal(1),
                FieldValue::Hex(0x20),
                FieldValue::Bool(false),
            ],
        );
        let rows = lit.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![&FieldValue::Decimal(1), &FieldValue::Hex(0x20)]);
        assert_eq!(rows[1], vec![&FieldValue::Bool(false)]);
        assert_eq!(lit.get("b"), Some(&FieldValue::Hex(0x20)));
        assert_eq!(lit.get("missing"), None);
    }
}
