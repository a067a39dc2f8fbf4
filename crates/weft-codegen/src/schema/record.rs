use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Fields in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        // Descriptors are cached per concrete type, and shapes are static
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record types cannot be generic",
            ));
        }

        if node.named.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "record has no fields; nothing to map",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for field in &node.named {
            match Field::from_ast(field) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Record {
            ident: ast.ident.clone(),
            fields,
        })
    }
}
