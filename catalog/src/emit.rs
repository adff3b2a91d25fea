//! Accessor emission.
//!
//! Every entry becomes one [`Accessor`]. Zero-arity entries become constants whose key
//! is the entry name. Entries with values become functions taking `value0..valueN`,
//! whose key is the name followed by each value's text, separated by single spaces:
//! `"smth <value0> <value1>"`.

use std::fmt::{self, Display};

use crate::classify::Entry;

/// Prefix of generated parameter names.
pub const PARAM_PREFIX: &str = "value";

/// Separator placed before every interpolated value.
pub const SEPARATOR: &str = " ";

/// Name of the runtime lookup used in textual renderings.
pub const LOCALIZE: &str = "localize";

/// Name of the `index`-th generated parameter.
pub fn param_name(index: usize) -> String {
    format!("{PARAM_PREFIX}{index}")
}

/// Piece of a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Text copied into the key as is.
    Literal(String),
    /// The textual form of the parameter with this index.
    Placeholder(usize),
}

/// Lookup key as a sequence of literal text and parameter placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyTemplate {
    pub segments: Vec<Segment>,
}

impl KeyTemplate {
    /// Key for an entry: its name, then `" " + placeholder` per associated value.
    pub fn for_entry(entry: &Entry) -> Self {
        let mut template = Self::default();
        template.push_literal(&entry.name);
        for index in 0..entry.arity {
            template.push_literal(SEPARATOR);
            template.segments.push(Segment::Placeholder(index));
        }
        template
    }

    fn push_literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(Segment::Literal(last)) => last.push_str(text),
            _ => self.segments.push(Segment::Literal(text.to_owned())),
        }
    }

    /// Number of placeholders, which equals the arity of the entry.
    pub fn placeholders(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, Segment::Placeholder(_))).count()
    }

    /// `format!`-compatible template string with explicit positional indices.
    ///
    /// Braces in literal text are doubled, so `smth` with two values becomes
    /// `"smth {0} {1}"`.
    pub fn format_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(&text.replace('{', "{{").replace('}', "}}")),
                Segment::Placeholder(index) => out.push_str(&format!("{{{index}}}")),
            }
        }
        out
    }
}

/// Shows placeholders as `{valueN}`.
impl Display for KeyTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Placeholder(index) => write!(f, "{{{PARAM_PREFIX}{index}}}")?,
            }
        }
        Ok(())
    }
}

/// A generated member exposing one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// `name = localize("name")`
    Constant { name: String, key: KeyTemplate },
    /// `fn name(value0, ..) = localize("name {value0} ..")`
    Function { name: String, params: Vec<String>, key: KeyTemplate },
}

impl Accessor {
    /// Emit the accessor for a single entry.
    pub fn for_entry(entry: &Entry) -> Self {
        let key = KeyTemplate::for_entry(entry);
        if entry.arity == 0 {
            Self::Constant { name: entry.name.clone(), key }
        } else {
            let params = (0..entry.arity).map(param_name).collect();
            Self::Function { name: entry.name.clone(), params, key }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Constant { name, .. } | Self::Function { name, .. } => name,
        }
    }

    pub fn key(&self) -> &KeyTemplate {
        match self {
            Self::Constant { key, .. } | Self::Function { key, .. } => key,
        }
    }

    /// Generated parameter names, empty for constants.
    pub fn params(&self) -> &[String] {
        match self {
            Self::Constant { .. } => &[],
            Self::Function { params, .. } => params,
        }
    }

    /// Number of values the accessor takes, one per key placeholder.
    pub fn arity(&self) -> usize {
        self.key().placeholders()
    }
}

impl Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant { name, key } => write!(f, "{name} = {LOCALIZE}(\"{key}\")"),
            Self::Function { name, params, key } => {
                write!(f, "fn {name}({}) = {LOCALIZE}(\"{key}\")", params.join(", "))
            }
        }
    }
}

/// Emit one accessor per entry, keeping entry order.
pub fn emit(entries: &[Entry]) -> Vec<Accessor> {
    entries.iter().map(Accessor::for_entry).collect()
}
