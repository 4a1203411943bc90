/*!

# trie-source - compile-time source for Unicode property tries

This crate writes tries that are already built in memory out as array and
struct literals, so that the trie can be compiled into a program as static
data with no parsing at runtime.

# Example: write a numeric array

```rust
use trie_source::{write_array, Values};
let mut out = Vec::new();
let values: [u8; 5] = [0, 1, 9, 10, 255];
write_array(&mut out, Some("static const uint8_t v[%ld]={\n"), Values::U8(&values), 8, 5, Some("\n};\n"))
    .unwrap();
assert_eq!(String::from_utf8(out).unwrap(), "static const uint8_t v[5]={\n0,1,9,0xa,0xff\n};\n");
```

# Example: write a codepoint trie

```rust
use trie_source::ucptrie::{self, CodePointTrie, TrieType, ValueWidth};
use trie_source::{Language, Values};

let index = [0u16; 4];
let data = [0u8, 1, 2, 3];
let trie = CodePointTrie {
    index: &index,
    data: Values::U8(&data),
    index_length: 4,
    data_length: 4,
    high_start: 0x10000,
    shifted12_high_start: 0x10,
    trie_type: TrieType::Fast,
    value_width: ValueWidth::Bits8,
    index3_null_offset: 0x7fff,
    data_null_offset: 0,
    null_value: 0,
};
let mut out = Vec::new();
ucptrie::write_named(&mut out, Language::C.syntax(), "demo", &trie).unwrap();
let text = String::from_utf8(out).unwrap();
assert!(text.starts_with("static const uint16_t demo_trieIndex[4]={\n0,0,0,0\n};\n"));
assert!(text.contains("static const UCPTrie demo_trie={\n    demo_trieIndex,\n    { demo_trieData },\n"));
```

# Output format

Array elements up to 9 are written in decimal and larger ones in lowercase hex
with a `0x` prefix. Lines break after every 16 elements. Both rules exist so
that regenerating a file after a small data change produces a small diff.

Struct literals list the runtime struct's fields in declaration order. The
C target matches the layout of ICU's generated data files exactly. The Rust
target writes statics that use the types from [`runtime_types`].

# Errors

Arguments are validated before anything is written. Failures are logged
through the `log` facade and returned as [`Error`]. Nothing is rolled back: if
a sink write fails midway, whatever was already written stays.

*/

#![warn(clippy::all)]

pub use crate::array::{format_value, write_array, Values, VALUES_PER_LINE};
pub use crate::error::Error;
pub use crate::invchars::write_array_of_mostly_inv_chars;
pub use crate::sink::{render_template, Sink};
pub use crate::syntax::{CSyntax, Language, RustSyntax, Syntax};

mod array;
mod error;
mod invchars;
mod sink;

pub mod banner;
pub mod layout;
pub mod runtime_types;
pub mod syntax;
pub mod ucptrie;
pub mod utrie2;
