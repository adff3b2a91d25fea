//! Entry classification.

use std::collections::HashSet;

use crate::locate::Catalog;

/// One catalog case reduced to what code generation needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Used verbatim as the accessor name and the first token of the key.
    pub name: String,
    /// Number of associated values.
    pub arity: usize,
}

impl Entry {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self { name: name.into(), arity }
    }
}

/// Classify every case of the catalog, in declaration order.
///
/// Labels and types of associated values are not looked at: labeled and unlabeled
/// values both count toward the arity.
pub fn classify(catalog: &Catalog<'_>) -> Vec<Entry> {
    catalog.cases().iter().map(|case| Entry::new(case.name.as_str(), case.values.len())).collect()
}

/// Names that occur more than once, each reported once, in order of their second occurrence.
pub fn duplicate_names(entries: &[Entry]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    entries
        .iter()
        .map(|entry| entry.name.as_str())
        .filter(|name| !seen.insert(*name) && reported.insert(*name))
        .collect()
}
