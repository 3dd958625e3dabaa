//! The RDF term model used by the linked-data browser.
//!
//! A [`Term`] is either a [`Uri`], a [`Literal`] or a [`BlankNode`]. Terms are immutable and
//! compare by variant and canonical form.

mod error;
mod literal;
mod term;
pub mod vocab;

pub use error::ConstructionError;
pub use literal::{Literal, LiteralAnnotation, NativeValue};
pub use term::{BlankNode, Term, TermKind, Uri};
