/// The `#[column("name")]` field attribute.
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: syn::LitStr,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();

        if !lookahead.peek(syn::LitStr) {
            return Err(lookahead.error());
        }

        let name: syn::LitStr = input.parse()?;

        if name.value().is_empty() {
            return Err(syn::Error::new_spanned(&name, "column name must not be empty"));
        }

        if !input.is_empty() {
            return Err(syn::Error::new(
                input.span(),
                "expected a single column name, e.g. #[column(\"user_id\")]",
            ));
        }

        Ok(Column { name })
    }
}
