//! Rust declarations of the runtime trie structs.
//!
//! Rust output refers to `Trie2`, `CodePointTrie` and `CodePointTrieData`. These
//! are generated from the same field tables as the struct literals, so a
//! generated file and its types cannot drift apart.

use crate::error::Error;
use crate::layout::Layout;
use crate::sink::Sink;
use crate::{ucptrie, utrie2};
use codegen::Scope;

fn add_struct(scope: &mut Scope, layout: &Layout, doc: &str) {
    let s = scope.new_struct(layout.rust_type);
    s.vis("pub")
        .derive("Debug")
        .derive("Clone")
        .derive("Copy")
        .doc(doc);
    for decl in layout.fields {
        s.field(&format!("pub {}", decl.name), decl.rust_type);
    }
}

/// Build the runtime type declarations.
pub fn runtime_types() -> String {
    let mut scope = Scope::new();

    let data = scope.new_enum("CodePointTrieData");
    data.vis("pub")
        .derive("Debug")
        .derive("Clone")
        .derive("Copy")
        .doc("The data array of a codepoint trie, by value width.");
    data.new_variant("U16").tuple("&'static [u16]");
    data.new_variant("U32").tuple("&'static [u32]");
    data.new_variant("U8").tuple("&'static [u8]");

    add_struct(
        &mut scope,
        &ucptrie::LAYOUT,
        "A codepoint trie whose arrays are statics.",
    );
    add_struct(
        &mut scope,
        &utrie2::LAYOUT,
        "A legacy trie whose arrays are statics.",
    );

    scope.to_string()
}

/// Write the runtime type declarations to `sink`.
pub fn write_runtime_types<S: Sink + ?Sized>(sink: &mut S) -> Result<(), Error> {
    sink.write_text(&runtime_types())?;
    sink.write_text("\n\n")?;
    Ok(())
}
