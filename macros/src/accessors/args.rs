//! Attribute arguments: `#[localizable(localize = path, vis = pub(crate))]`.

use syn::meta::ParseNestedMeta;
use syn::{Path, Result, Visibility, parse_quote};

/// Parsed `#[localizable(...)]` arguments.
#[derive(Debug, Clone)]
pub struct MacroArgs {
    /// Function called with the key text, `fn(String) -> String`.
    pub localize: Path,
    /// Visibility of the generated accessors.
    pub vis: Visibility,
}

impl Default for MacroArgs {
    fn default() -> Self {
        Self { localize: parse_quote!(localize), vis: parse_quote!(pub) }
    }
}

impl MacroArgs {
    /// Handle one `key = value` pair. Used with [`syn::meta::parser`].
    pub fn parse_meta(&mut self, meta: ParseNestedMeta) -> Result<()> {
        if meta.path.is_ident("localize") {
            self.localize = meta.value()?.parse()?;
            Ok(())
        } else if meta.path.is_ident("vis") {
            self.vis = meta.value()?.parse()?;
            Ok(())
        } else {
            Err(meta.error("unknown localizable attribute, expected `localize` or `vis`"))
        }
    }
}
