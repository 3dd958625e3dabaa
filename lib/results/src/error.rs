/// An error raised when a response is not a SPARQL results JSON document.
///
/// Only the top-level structure is validated. Problems with single bindings are reported as
/// [`TermDecodeError`] and do not fail the parse.
#[derive(Debug, thiserror::Error)]
#[error("json parse error: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// An error raised while decoding a single binding into a [`Term`](lodbrowse_model::Term).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TermDecodeError {
    /// The `type` of the binding is none of `uri`, `literal`, `typed-literal` or `bnode`.
    #[error("unknown term type '{0}'")]
    UnknownKind(String),
}
