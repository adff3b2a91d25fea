//! Proc-macros for localizable.
//!
//! This crate provides `#[localizable]`, an attribute that turns a nested enum of
//! localization keys into typed accessors.

use proc_macro::TokenStream;
use syn::{Item, parse_macro_input};

mod accessors;

use accessors::MacroArgs;

/// Attribute macro generating localized-string accessors from an enum of keys.
///
/// Apply it to an inline module. The first enum inside the module is the key catalog;
/// every variant becomes one accessor appended to the module:
///
/// - a variant without fields becomes a lazily initialized `static` holding
///   `localize("<name>")`
/// - a variant with `N` fields (tuple or named) becomes a function taking
///   `value0 .. value{N-1}`, each `impl Display`, returning
///   `localize("<name> <value0> <value1> ..")`
///
/// Variant names are used verbatim, both for the accessor and for the key.
///
/// # Usage
///
/// ```ignore
/// #[localizable]
/// pub mod strings {
///     use crate::i18n::localize;
///
///     #[allow(non_camel_case_types, dead_code)]
///     enum Keys {
///         login_error,
///         login_welcome(String),
///     }
/// }
///
/// // Generated inside `strings`:
/// // pub static login_error: LazyLock<String> = LazyLock::new(|| localize(String::from("login_error")));
/// // pub fn login_welcome(value0: impl Display) -> String { localize(format!("login_welcome {0}", value0)) }
/// ```
///
/// # Attributes
///
/// - `localize = path::to::func` - lookup function called by the generated code, with
///   signature `fn(String) -> String`. Defaults to `localize`, resolved inside the module.
/// - `vis = pub(crate)` - visibility of generated accessors. Defaults to `pub`.
///
/// # Errors
///
/// When the annotated item has no nested enum (including every non-module item,
/// since Rust has no nested declarations elsewhere) the item is left as is and a
/// compile error is reported at its name:
/// `'Localizable' macro needs an internal enum which is a set of keys for localization`.
#[proc_macro_attribute]
pub fn localizable(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = MacroArgs::default();
    let parser = syn::meta::parser(|meta| args.parse_meta(meta));
    parse_macro_input!(attr with parser);

    let item = parse_macro_input!(item as Item);

    match accessors::expand(&args, item) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
