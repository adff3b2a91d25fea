use proptest::prelude::*;

use super::generators::*;
use crate::emit::Accessor;
use crate::error::Error;
use crate::expand;
use crate::model::{Container, Member};

proptest! {
    #[test]
    fn missing_catalog_yields_one_diagnostic(container in arb_container_without_catalog()) {
        let diagnostic = expand(&container).unwrap_err();
        prop_assert_eq!(diagnostic.error, Error::MissingCatalog);
    }

    #[test]
    fn one_accessor_per_case_in_order(
        before in prop::collection::vec(arb_plain_member(), 0..4),
        catalog in arb_catalog_member(),
        kind in arb_container_kind(),
    ) {
        let mut members = before;
        members.push(catalog.clone());
        let accessors = expand(&Container::new(kind, ()).with_members(members)).unwrap();

        let crate::model::MemberKind::Enum { cases } = &catalog.kind else { unreachable!() };
        prop_assert_eq!(accessors.len(), cases.len());
        for (accessor, case) in accessors.iter().zip(cases) {
            prop_assert_eq!(accessor.name(), case.name.as_str());
            prop_assert_eq!(accessor.arity(), case.values.len());
            prop_assert_eq!(accessor.key().placeholders(), case.values.len());
            prop_assert_eq!(matches!(accessor, Accessor::Constant { .. }), case.values.is_empty());
        }
    }

    #[test]
    fn later_catalogs_are_ignored(first in arb_catalog_member(), rest in prop::collection::vec(arb_catalog_member(), 1..4)) {
        let alone = expand(&Container::new(crate::model::ContainerKind::Module, ()).with_members(vec![first.clone()]));
        let members: Vec<Member> = std::iter::once(first).chain(rest).collect();
        let together = expand(&Container::new(crate::model::ContainerKind::Module, ()).with_members(members));
        prop_assert_eq!(alone, together);
    }

    #[test]
    fn key_is_name_then_spaced_placeholders(name in arb_name(), arity in 1usize..6) {
        let accessor = Accessor::for_entry(&crate::Entry::new(name.clone(), arity));
        let expected = std::iter::once(name)
            .chain((0..arity).map(|i| format!("{{value{i}}}")))
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(accessor.key().to_string(), expected);
    }
}
