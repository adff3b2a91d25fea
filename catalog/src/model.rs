//! Declaration model consumed by the pipeline.
//!
//! A host lowers its own syntax tree into these types. Only the shape matters:
//! members are an ordered list of tagged declarations, and an enumeration member
//! carries its cases with their associated values.

use strum::AsRefStr;

/// Kind of the annotated declaration that receives generated members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ContainerKind {
    Module,
    Struct,
    Enum,
    Union,
    Trait,
    Impl,
}

/// The annotated declaration.
///
/// `L` is whatever the host uses to point at source code. The core never inspects it,
/// it only hands it back inside a [`Diagnostic`](crate::Diagnostic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<L> {
    pub kind: ContainerKind,
    /// Existing members in declaration order.
    pub members: Vec<Member>,
    pub location: L,
}

impl<L> Container<L> {
    /// Create a container with no members.
    pub fn new(kind: ContainerKind, location: L) -> Self {
        Self { kind, members: Vec::new(), location }
    }

    /// Replace the member list.
    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }
}

/// Access level of a member. The locator ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Private,
    Crate,
    Public,
    /// `pub(in path)`, `pub(super)` and friends.
    Restricted(String),
}

/// One member declaration of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Declared name, if the declaration has one (imports and macro calls don't).
    pub name: Option<String>,
    pub visibility: Visibility,
    pub kind: MemberKind,
}

impl Member {
    /// An enumeration member with the given cases.
    pub fn enumeration(name: impl Into<String>, visibility: Visibility, cases: Vec<Case>) -> Self {
        Self { name: Some(name.into()), visibility, kind: MemberKind::Enum { cases } }
    }

    /// Any non-enumeration member.
    pub fn item(kind: MemberKind, name: Option<&str>) -> Self {
        Self { name: name.map(str::to_owned), visibility: Visibility::default(), kind }
    }
}

/// What a member declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    Enum { cases: Vec<Case> },
    Struct,
    Function,
    Constant,
    Static,
    TypeAlias,
    Module,
    Import,
    Other,
}

impl MemberKind {
    /// Shape predicate for catalog candidates: the member has a set of case-like entries.
    pub fn is_enumeration(&self) -> bool {
        matches!(self, Self::Enum { .. })
    }
}

/// One case of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    /// Associated values in declaration order.
    pub values: Vec<AssociatedValue>,
}

impl Case {
    /// A case without associated values.
    pub fn unit(name: impl Into<String>) -> Self {
        Self { name: name.into(), values: Vec::new() }
    }

    /// A case with unlabeled values of the given types.
    pub fn positional<T: Into<String>>(name: impl Into<String>, types: impl IntoIterator<Item = T>) -> Self {
        let values = types.into_iter().map(|ty| AssociatedValue { label: None, ty: ty.into() }).collect();
        Self { name: name.into(), values }
    }

    /// A case with labeled values, given as `(label, type)` pairs.
    pub fn labeled<N: Into<String>, T: Into<String>>(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (N, T)>,
    ) -> Self {
        let values = fields
            .into_iter()
            .map(|(label, ty)| AssociatedValue { label: Some(label.into()), ty: ty.into() })
            .collect();
        Self { name: name.into(), values }
    }
}

/// An associated value of a case. The type is kept as text and never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociatedValue {
    pub label: Option<String>,
    pub ty: String,
}
