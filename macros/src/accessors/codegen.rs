//! Rendering of accessors as Rust items.

use localizable_catalog::Accessor;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::args::MacroArgs;

/// Generate the item for one accessor.
///
/// Constants become `LazyLock<String>` statics, functions take every value as
/// `impl Display`. Names are kept verbatim, so case lints are silenced on the item.
/// `raw` marks names that were raw identifiers in the catalog.
pub fn generate_accessor(accessor: &Accessor, raw: bool, args: &MacroArgs) -> TokenStream {
    let MacroArgs { localize, vis } = args;
    let ident = if raw {
        Ident::new_raw(accessor.name(), Span::call_site())
    } else {
        Ident::new(accessor.name(), Span::call_site())
    };
    let key = accessor.key();
    let doc = format!(" Localized string for the `{key}` key.");

    match accessor {
        Accessor::Constant { .. } => {
            let text = key.to_string();
            quote! {
                #[doc = #doc]
                #[allow(non_upper_case_globals)]
                #vis static #ident: ::std::sync::LazyLock<::std::string::String> =
                    ::std::sync::LazyLock::new(|| #localize(::std::string::String::from(#text)));
            }
        }
        Accessor::Function { .. } => {
            let params: Vec<_> = accessor.params().iter().map(|p| Ident::new(p, Span::call_site())).collect();
            let template = key.format_string();
            quote! {
                #[doc = #doc]
                #[allow(non_snake_case)]
                #vis fn #ident(#(#params: impl ::std::fmt::Display),*) -> ::std::string::String {
                    #localize(::std::format!(#template, #(#params),*))
                }
            }
        }
    }
}
