use crate::locate::locate;
use crate::model::{Case, Member, MemberKind, Visibility};

fn keys(name: &str, visibility: Visibility, cases: &[&str]) -> Member {
    Member::enumeration(name, visibility, cases.iter().map(|c| Case::unit(*c)).collect())
}

#[test]
fn test_empty_members_has_no_catalog() {
    assert!(locate(&[]).is_none());
}

#[test]
fn test_non_enum_members_are_skipped() {
    let members = vec![
        Member::item(MemberKind::Struct, Some("Inner")),
        Member::item(MemberKind::Function, Some("helper")),
        Member::item(MemberKind::Import, None),
    ];
    assert!(locate(&members).is_none());
}

#[test]
fn test_finds_enum_after_other_members() {
    let members = vec![
        Member::item(MemberKind::Constant, Some("VERSION")),
        keys("Strings", Visibility::Private, &["next", "prev"]),
    ];
    let catalog = locate(&members).expect("catalog");
    assert_eq!(catalog.name(), "Strings");
    assert_eq!(catalog.cases().len(), 2);
}

#[test]
fn test_first_enum_wins() {
    let members = vec![
        keys("First", Visibility::Public, &["a"]),
        keys("Second", Visibility::Public, &["b", "c"]),
    ];
    let catalog = locate(&members).expect("catalog");
    assert_eq!(catalog.name(), "First");
    assert_eq!(catalog.cases(), &[Case::unit("a")]);
}

#[test]
fn test_visibility_and_name_are_ignored() {
    for visibility in [Visibility::Private, Visibility::Crate, Visibility::Public, Visibility::Restricted("super".into())] {
        let members = vec![keys("Anything", visibility, &["next"])];
        assert!(locate(&members).is_some());
    }
}

#[test]
fn test_empty_enum_is_still_a_catalog() {
    let members = vec![keys("Empty", Visibility::Private, &[])];
    let catalog = locate(&members).expect("catalog");
    assert!(catalog.cases().is_empty());
}
