extern crate proc_macro;

use proc_macro::TokenStream;

/// Emits the runtime field table of a struct so it can be mapped.
///
/// Field attributes:
///
/// * `#[key]` marks the field as part of the record's key.
/// * `#[embed]` flattens a nested record's fields into this one.
/// * `#[tag = "..."]` attaches an annotation string for other layers.
#[proc_macro_derive(Record, attributes(key, embed, tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match ormlet_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
