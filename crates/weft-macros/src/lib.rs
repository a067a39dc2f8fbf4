extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `weft::Record` for a struct with named fields.
///
/// Each field binds to the snake-case form of its name. Use
/// `#[column("name")]` to bind a field to a differently named column.
#[proc_macro_derive(Record, attributes(column))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match weft_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
