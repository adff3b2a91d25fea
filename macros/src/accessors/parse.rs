//! Lowering of the annotated item into the catalog model.

use std::collections::HashSet;

use localizable_catalog::model::{self, Case, Container, ContainerKind, Member, MemberKind};
use proc_macro2::Span;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Error, Fields, Ident, ImplItem, Item, Result, TraitItem, Variant, Visibility};

/// Lower an annotated item into a container located at the start of the declaration.
///
/// Only inline modules can hold a nested enum in Rust. Structs, enums and unions lower
/// to containers without members; traits and impl blocks keep their associated items.
pub fn lower(item: &Item) -> Result<Container<Span>> {
    let location = item.span();
    let container = match item {
        Item::Mod(module) => {
            let members = module
                .content
                .as_ref()
                .map(|(_, items)| items.iter().map(lower_item).collect())
                .unwrap_or_default();
            Container::new(ContainerKind::Module, location).with_members(members)
        }
        Item::Struct(_) => Container::new(ContainerKind::Struct, location),
        Item::Enum(_) => Container::new(ContainerKind::Enum, location),
        Item::Union(_) => Container::new(ContainerKind::Union, location),
        Item::Trait(item) => Container::new(ContainerKind::Trait, location)
            .with_members(item.items.iter().map(lower_trait_item).collect()),
        Item::Impl(item) => Container::new(ContainerKind::Impl, location)
            .with_members(item.items.iter().map(lower_impl_item).collect()),
        other => {
            return Err(Error::new_spanned(
                other,
                "`#[localizable]` can only be applied to modules, structs, enums, unions, traits or impl blocks",
            ));
        }
    };

    Ok(container)
}

fn member(kind: MemberKind, ident: Option<&Ident>, vis: &Visibility) -> Member {
    let name = ident.map(ToString::to_string);
    Member { visibility: lower_visibility(vis), ..Member::item(kind, name.as_deref()) }
}

/// Lower one module item.
pub fn lower_item(item: &Item) -> Member {
    match item {
        Item::Enum(item) => Member::enumeration(
            item.ident.to_string(),
            lower_visibility(&item.vis),
            item.variants.iter().map(lower_variant).collect(),
        ),
        Item::Struct(item) => member(MemberKind::Struct, Some(&item.ident), &item.vis),
        Item::Fn(item) => member(MemberKind::Function, Some(&item.sig.ident), &item.vis),
        Item::Const(item) => member(MemberKind::Constant, Some(&item.ident), &item.vis),
        Item::Static(item) => member(MemberKind::Static, Some(&item.ident), &item.vis),
        Item::Type(item) => member(MemberKind::TypeAlias, Some(&item.ident), &item.vis),
        Item::Mod(item) => member(MemberKind::Module, Some(&item.ident), &item.vis),
        Item::Use(item) => member(MemberKind::Import, None, &item.vis),
        Item::ExternCrate(item) => member(MemberKind::Import, Some(&item.ident), &item.vis),
        Item::Union(item) => member(MemberKind::Struct, Some(&item.ident), &item.vis),
        Item::Trait(item) => member(MemberKind::Other, Some(&item.ident), &item.vis),
        _ => member(MemberKind::Other, None, &Visibility::Inherited),
    }
}

fn lower_trait_item(item: &TraitItem) -> Member {
    match item {
        TraitItem::Const(item) => member(MemberKind::Constant, Some(&item.ident), &Visibility::Inherited),
        TraitItem::Fn(item) => member(MemberKind::Function, Some(&item.sig.ident), &Visibility::Inherited),
        TraitItem::Type(item) => member(MemberKind::TypeAlias, Some(&item.ident), &Visibility::Inherited),
        _ => member(MemberKind::Other, None, &Visibility::Inherited),
    }
}

fn lower_impl_item(item: &ImplItem) -> Member {
    match item {
        ImplItem::Const(item) => member(MemberKind::Constant, Some(&item.ident), &item.vis),
        ImplItem::Fn(item) => member(MemberKind::Function, Some(&item.sig.ident), &item.vis),
        ImplItem::Type(item) => member(MemberKind::TypeAlias, Some(&item.ident), &item.vis),
        _ => member(MemberKind::Other, None, &Visibility::Inherited),
    }
}

/// Lower an enum variant. Tuple and named fields both count as associated values;
/// an explicit discriminant is ignored. Raw identifiers lose their `r#` prefix.
pub fn lower_variant(variant: &Variant) -> Case {
    let name = variant.ident.unraw().to_string();
    match &variant.fields {
        Fields::Unit => Case::unit(name),
        Fields::Unnamed(fields) => Case::positional(name, fields.unnamed.iter().map(|f| type_text(&f.ty))),
        Fields::Named(fields) => Case::labeled(
            name,
            fields.named.iter().map(|f| (f.ident.as_ref().map(ToString::to_string).unwrap_or_default(), type_text(&f.ty))),
        ),
    }
}

/// Unraw names of variants written as raw identifiers (`r#gen`) in the module's enums.
///
/// The catalog only sees unraw names, so accessors for these get their `r#` back here.
pub fn raw_variant_names(item: &Item) -> HashSet<String> {
    let Item::Mod(module) = item else {
        return HashSet::new();
    };
    module
        .content
        .iter()
        .flat_map(|(_, items)| items)
        .filter_map(|item| match item {
            Item::Enum(item) => Some(item),
            _ => None,
        })
        .flat_map(|item| &item.variants)
        .filter(|variant| variant.ident.to_string().starts_with("r#"))
        .map(|variant| variant.ident.unraw().to_string())
        .collect()
}

fn type_text(ty: &syn::Type) -> String {
    ty.to_token_stream().to_string()
}

fn lower_visibility(vis: &Visibility) -> model::Visibility {
    match vis {
        Visibility::Public(_) => model::Visibility::Public,
        Visibility::Inherited => model::Visibility::Private,
        Visibility::Restricted(restricted) if restricted.in_token.is_none() && restricted.path.is_ident("crate") => {
            model::Visibility::Crate
        }
        Visibility::Restricted(restricted) => model::Visibility::Restricted(restricted.path.to_token_stream().to_string()),
    }
}
