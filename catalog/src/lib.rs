//! Host-independent core of the `#[localizable]` macro.
//!
//! Given a container declaration that holds a nested enumeration of localization
//! keys, this crate produces one accessor per key. The pipeline is strictly
//! sequential:
//!
//! - [`locate`] - find the first enumeration among the container's members
//! - [`classify`] - turn each of its cases into an [`Entry`] (name + arity)
//! - [`emit`] - turn each entry into an [`Accessor`]
//!
//! Nothing here knows about `syn` or `proc_macro`. The container is described by the
//! plain data model in [`model`], and locations are an opaque type parameter so that a
//! host can carry its own span type through to the [`Diagnostic`].
//!
//! ```
//! use localizable_catalog::model::{Case, Container, ContainerKind, Member, Visibility};
//!
//! let container = Container::new(ContainerKind::Module, ()).with_members(vec![Member::enumeration(
//!     "Strings",
//!     Visibility::Private,
//!     vec![Case::unit("next"), Case::positional("smth", ["String", "String"])],
//! )]);
//!
//! let accessors = localizable_catalog::expand(&container).unwrap();
//! assert_eq!(accessors[0].to_string(), r#"next = localize("next")"#);
//! assert_eq!(accessors[1].to_string(), r#"fn smth(value0, value1) = localize("smth {value0} {value1}")"#);
//! ```

pub mod classify;
pub mod emit;
pub mod error;
pub mod locate;
pub mod model;

#[cfg(any(test, feature = "proptest"))]
pub mod test;

pub use classify::{Entry, classify};
pub use emit::{Accessor, KeyTemplate, Segment, emit};
pub use error::{Diagnostic, Error, Severity};
pub use locate::{Catalog, locate};
pub use model::Container;

/// Run the whole pipeline over one container.
///
/// Returns the generated accessors in catalog declaration order, or a single
/// [`Diagnostic`] located at the container when it has no nested enumeration.
pub fn expand<L: Clone>(container: &Container<L>) -> Result<Vec<Accessor>, Diagnostic<L>> {
    let Some(catalog) = locate(&container.members) else {
        tracing::debug!(kind = container.kind.as_ref(), members = container.members.len(), "no catalog enum found");
        return Err(Error::MissingCatalog.at(container.location.clone()));
    };

    let entries = classify(&catalog);
    tracing::debug!(
        kind = container.kind.as_ref(),
        catalog = catalog.name(),
        entries = entries.len(),
        "classified catalog entries"
    );

    for name in classify::duplicate_names(&entries) {
        tracing::warn!(catalog = catalog.name(), entry = name, "duplicate entry name, emitting every occurrence");
    }

    let accessors = emit(&entries);
    for accessor in &accessors {
        tracing::trace!(accessor = accessor.name(), arity = accessor.arity(), "emitted accessor");
    }
    Ok(accessors)
}
