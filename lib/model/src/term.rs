use crate::{Literal, NativeValue};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// The variant of a [`Term`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermKind {
    Uri,
    Literal,
    Blank,
}

/// An absolute URI reference.
///
/// The value is stored without the enclosing `<` `>` delimiters. The canonical form is `<value>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uri(String);

impl Uri {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Uri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl From<&str> for Uri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Uri {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A blank node.
///
/// The identifier is local to the response it was parsed from. Two blank nodes from different
/// result sets carry no relation, even if their identifiers match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(String);

impl BlankNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl Display for BlankNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// An RDF term.
///
/// Two terms are equal iff they are of the same [`TermKind`] and have the same canonical form
/// (their [`Display`] output). Hence, `"1"^^xsd:int` parsed from the wire equals the literal
/// built from the native integer `1`.
#[derive(Clone, Debug)]
pub enum Term {
    Uri(Uri),
    Literal(Literal),
    Blank(BlankNode),
}

impl Term {
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Uri(_) => TermKind::Uri,
            Term::Literal(_) => TermKind::Literal,
            Term::Blank(_) => TermKind::Blank,
        }
    }

    /// Returns the canonical textual form of the term.
    pub fn canonical_form(&self) -> String {
        self.to_string()
    }

    /// Returns the native value of the term.
    ///
    /// Literals return their value, URIs their string without delimiters and blank nodes
    /// nothing.
    pub fn native_value(&self) -> Option<NativeValue> {
        match self {
            Term::Uri(uri) => Some(NativeValue::String(uri.as_str().to_owned())),
            Term::Literal(literal) => Some(literal.value().clone()),
            Term::Blank(_) => None,
        }
    }

    pub fn as_uri(&self) -> Option<&Uri> {
        match self {
            Term::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn is_uri(&self) -> bool {
        matches!(self, Term::Uri(_))
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Uri(inner) => inner.fmt(f),
            Term::Literal(inner) => inner.fmt(f),
            Term::Blank(inner) => inner.fmt(f),
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Uri(a), Term::Uri(b)) => a == b,
            (Term::Blank(a), Term::Blank(b)) => a == b,
            (Term::Literal(a), Term::Literal(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.to_string().hash(state);
    }
}

impl From<Uri> for Term {
    fn from(value: Uri) -> Self {
        Term::Uri(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

impl From<BlankNode> for Term {
    fn from(value: BlankNode) -> Self {
        Term::Blank(value)
    }
}
