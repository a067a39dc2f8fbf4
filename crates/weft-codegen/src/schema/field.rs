use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type, as written
    pub(crate) ty: syn::Type,

    /// Explicit column name override
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut column = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(parsed) => column = Some(parsed),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            column,
        })
    }
}
