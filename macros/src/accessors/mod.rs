//! `#[localizable]` expansion.
//!
//! The catalog logic lives in `localizable_catalog`; this module is the host around it:
//! - `args` reads the attribute arguments
//! - `parse` lowers the annotated item into a `Container`
//! - `codegen` renders accessors as items
//!
//! Generated items are appended to the module; a missing catalog becomes a
//! `compile_error!` next to the untouched item.

mod args;
mod codegen;
mod parse;


pub use args::MacroArgs;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Item, Result};

/// Expand one annotated item.
pub fn expand(args: &MacroArgs, item: Item) -> Result<TokenStream> {
    let container = parse::lower(&item)?;

    match localizable_catalog::expand(&container) {
        Ok(accessors) => {
            let raw = parse::raw_variant_names(&item);
            let generated = accessors
                .iter()
                .map(|accessor| codegen::generate_accessor(accessor, raw.contains(accessor.name()), args));
            splice(item, generated)
        }
        Err(diagnostic) => {
            let error = Error::new(diagnostic.location, diagnostic.message).to_compile_error();
            Ok(quote! {
                #item
                #error
            })
        }
    }
}

/// Append generated items to the end of an inline module.
fn splice(item: Item, generated: impl Iterator<Item = TokenStream>) -> Result<TokenStream> {
    let Item::Mod(mut module) = item else {
        return Err(Error::new_spanned(item, "generated accessors can only be added to an inline module"));
    };
    let Some((_, items)) = module.content.as_mut() else {
        return Err(Error::new_spanned(module, "generated accessors can only be added to an inline module"));
    };

    items.extend(generated.map(Item::Verbatim));
    Ok(quote!(#module))
}
