use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let weft = &self.weft;
        let ident = &self.record.ident;
        let name = util::ident_str(ident);

        let field_shapes = self.record.fields.iter().map(|field| {
            let ty = &field.ty;
            let name = util::ident_str(&field.ident);
            let column = match &field.column {
                Some(column) => {
                    let lit = &column.name;
                    quote!(#weft::Option::Some(#lit))
                }
                None => quote!(#weft::Option::None),
            };

            quote! {
                #weft::FieldShape {
                    name: #name,
                    column: #column,
                    kind: <#ty as #weft::FieldType>::kind(),
                }
            }
        });

        let field_refs = self.record.fields.iter().map(|field| {
            let ty = &field.ty;
            let field_ident = &field.ident;
            quote!(<#ty as #weft::FieldType>::field_ref(&self.#field_ident))
        });

        let field_muts = self.record.fields.iter().map(|field| {
            let ty = &field.ty;
            let field_ident = &field.ident;
            quote!(<#ty as #weft::FieldType>::field_mut(&mut self.#field_ident))
        });

        quote! {
            impl #weft::Record for #ident {
                fn shape() -> #weft::Shape {
                    #weft::Shape {
                        name: #name,
                        fields: vec![ #( #field_shapes, )* ],
                    }
                }

                fn nested(&self) -> #weft::Nested {
                    #weft::Nested::of::<Self>()
                }

                fn fields(&self) -> #weft::Vec<#weft::FieldRef<'_>> {
                    vec![ #( #field_refs, )* ]
                }

                fn fields_mut(&mut self) -> #weft::Vec<#weft::FieldMut<'_>> {
                    vec![ #( #field_muts, )* ]
                }
            }
        }
    }

    /// Lets the record be embedded by value in another record.
    pub(super) fn expand_field_type_impl(&self) -> TokenStream {
        let weft = &self.weft;
        let ident = &self.record.ident;

        quote! {
            impl #weft::FieldType for #ident {
                fn kind() -> #weft::FieldKind {
                    #weft::FieldKind::Embedded(#weft::Nested::of::<Self>())
                }

                fn field_ref(&self) -> #weft::FieldRef<'_> {
                    #weft::FieldRef::Embedded(self)
                }

                fn field_mut(&mut self) -> #weft::FieldMut<'_> {
                    #weft::FieldMut::Embedded(self)
                }
            }
        }
    }

    /// Lets the record receive a single mapped row.
    pub(super) fn expand_destination_impl(&self) -> TokenStream {
        let weft = &self.weft;
        let ident = &self.record.ident;

        quote! {
            impl #weft::Destination for #ident {
                fn target(&mut self) -> #weft::Target<'_> {
                    #weft::Target::One(self)
                }
            }
        }
    }
}
