/// An error raised when a [`Literal`](crate::Literal) cannot be built from a native value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// The value has no corresponding XSD datatype.
    #[error("cannot infer xsd:datatype from {0}")]
    UnsupportedValue(String),
    /// An integer does not fit into the native integer representation.
    #[error("integer {0} is out of range")]
    IntegerOutOfRange(String),
}
