/// Turns a Rust identifier into the string literal used in shapes and error
/// messages, dropping any raw-identifier prefix.
pub(crate) fn ident_str(ident: &syn::Ident) -> syn::LitStr {
    let name = ident.to_string();
    let name = name.strip_prefix("r#").unwrap_or(&name);
    syn::LitStr::new(name, ident.span())
}
