//! Catalog lookup among a container's members.

use crate::model::{Case, Member, MemberKind};

/// The enumeration holding the localization keys.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    member: &'a Member,
    cases: &'a [Case],
}

impl<'a> Catalog<'a> {
    /// Name of the enumeration, or an empty string for anonymous hosts.
    pub fn name(&self) -> &'a str {
        self.member.name.as_deref().unwrap_or_default()
    }

    /// Cases in declaration order.
    pub fn cases(&self) -> &'a [Case] {
        self.cases
    }
}

/// Find the first enumeration-shaped member.
///
/// Name and visibility play no role; later enumerations are ignored.
pub fn locate(members: &[Member]) -> Option<Catalog<'_>> {
    let member = members.iter().find(|member| member.kind.is_enumeration())?;
    match &member.kind {
        MemberKind::Enum { cases } => Some(Catalog { member, cases }),
        _ => None,
    }
}
