mod record;
mod util;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for weft types
    weft: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let field_type_impl = self.expand_field_type_impl();
        let destination_impl = self.expand_destination_impl();

        wrap_in_const(quote! {
            #record_impl
            #field_type_impl
            #destination_impl
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        weft: quote!(_weft::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use weft as _weft;
            #code
        };
    }
}
