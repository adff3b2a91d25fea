use test_case::test_case;

use crate::classify::{Entry, classify, duplicate_names};
use crate::locate::locate;
use crate::model::{Case, Member, Visibility};

fn classify_cases(cases: Vec<Case>) -> Vec<Entry> {
    let members = vec![Member::enumeration("Strings", Visibility::Private, cases)];
    classify(&locate(&members).expect("catalog"))
}

#[test_case(Case::unit("next"), 0; "unit_case")]
#[test_case(Case::positional("news", ["String"]), 1; "single_value")]
#[test_case(Case::positional("smth", ["String", "String"]), 2; "two_values")]
#[test_case(Case::positional("mixed", ["u32", "&'static str", "f64"]), 3; "mixed_types")]
#[test_case(Case::labeled("greet", [("name", "String"), ("count", "usize")]), 2; "labeled_values")]
fn test_arity(case: Case, arity: usize) {
    let name = case.name.clone();
    assert_eq!(classify_cases(vec![case]), vec![Entry::new(name, arity)]);
}

#[test]
fn test_declaration_order_is_kept() {
    let entries = classify_cases(vec![
        Case::unit("next"),
        Case::unit("prev"),
        Case::positional("news", ["String"]),
        Case::positional("smth", ["String", "String"]),
    ]);
    assert_eq!(
        entries,
        vec![Entry::new("next", 0), Entry::new("prev", 0), Entry::new("news", 1), Entry::new("smth", 2)]
    );
}

#[test]
fn test_duplicates_are_kept() {
    let entries = classify_cases(vec![Case::unit("next"), Case::positional("next", ["String"])]);
    assert_eq!(entries, vec![Entry::new("next", 0), Entry::new("next", 1)]);
}

#[test]
fn test_duplicate_names_reported_once() {
    let entries = vec![Entry::new("a", 0), Entry::new("b", 0), Entry::new("a", 1), Entry::new("a", 2), Entry::new("b", 0)];
    assert_eq!(duplicate_names(&entries), vec!["a", "b"]);
}

#[test]
fn test_no_duplicates() {
    let entries = vec![Entry::new("a", 0), Entry::new("b", 0)];
    assert!(duplicate_names(&entries).is_empty());
}
