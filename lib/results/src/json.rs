use crate::{ParseError, Solution, TermDecodeError};
use lodbrowse_model::{BlankNode, Literal, Term, Uri};
use serde::Deserialize;
use std::collections::BTreeMap;

/// One row of `results.bindings` as found on the wire.
pub type RawRow = BTreeMap<String, RawBinding>;

/// A parsed SPARQL results JSON document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct QueryResults {
    pub head: ResultsHead,
    pub results: ResultsBody,
}

/// The `head` object of a results document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResultsHead {
    #[serde(default)]
    pub link: Vec<String>,
    #[serde(default)]
    pub vars: Vec<String>,
}

/// The `results` object of a results document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResultsBody {
    #[serde(default)]
    pub distinct: bool,
    #[serde(default)]
    pub ordered: bool,
    #[serde(default)]
    pub bindings: Vec<RawRow>,
}

/// A binding descriptor, e.g. `{"type": "literal", "value": "Bob", "xml:lang": "en"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawBinding {
    /// Can be "uri", "literal", "typed-literal" or "bnode".
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "xml:lang", default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub datatype: Option<String>,
}

/// Parses a SPARQL results JSON document.
///
/// Fails only if the document cannot be decoded into the head/results shape.
pub fn parse(raw: &[u8]) -> Result<QueryResults, ParseError> {
    Ok(serde_json::from_slice(raw)?)
}

impl QueryResults {
    /// See [`parse`].
    pub fn parse(raw: &[u8]) -> Result<Self, ParseError> {
        parse(raw)
    }

    /// The variables declared in `head.vars`, in order.
    pub fn variables(&self) -> &[String] {
        &self.head.vars
    }

    pub fn links(&self) -> &[String] {
        &self.head.link
    }

    /// The number of solutions.
    pub fn len(&self) -> usize {
        self.results.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }

    /// Returns one [`Solution`] per entry in `results.bindings`, in input order.
    ///
    /// Bindings that cannot be decoded are left out of their row. A row in which no binding could
    /// be decoded is still returned, so that solution `i` always corresponds to binding `i`.
    pub fn solutions(&self) -> Vec<Solution> {
        self.results
            .bindings
            .iter()
            .map(|row| {
                row.iter()
                    .filter_map(|(variable, binding)| {
                        decode_binding(variable, binding).map(|term| (variable.clone(), term))
                    })
                    .collect()
            })
            .collect()
    }

    /// Returns the decoded terms of each declared variable, in row order.
    ///
    /// Variables that are declared but bound in no row are absent from the map.
    pub fn bindings(&self) -> BTreeMap<String, Vec<Term>> {
        let mut columns = BTreeMap::new();
        for variable in &self.head.vars {
            let terms = self
                .results
                .bindings
                .iter()
                .filter_map(|row| row.get(variable))
                .filter_map(|binding| decode_binding(variable, binding))
                .collect::<Vec<_>>();
            if !terms.is_empty() {
                columns.insert(variable.clone(), terms);
            }
        }
        columns
    }
}

fn decode_binding(variable: &str, binding: &RawBinding) -> Option<Term> {
    match Term::try_from(binding) {
        Ok(term) => Some(term),
        Err(error) => {
            tracing::debug!("Dropping binding of ?{variable}: {error}");
            None
        }
    }
}

impl TryFrom<&RawBinding> for Term {
    type Error = TermDecodeError;

    fn try_from(binding: &RawBinding) -> Result<Self, Self::Error> {
        let value = binding.value.as_str();
        Ok(match binding.kind.as_str() {
            "bnode" => BlankNode::new(value).into(),
            "uri" => Uri::new(value).into(),
            "literal" => match non_empty(binding.lang.as_deref()) {
                Some(lang) => Literal::new_language_tagged(value, lang).into(),
                None => Literal::new_simple(value).into(),
            },
            "typed-literal" => match non_empty(binding.datatype.as_deref()) {
                Some(datatype) => Literal::new_typed(value, Uri::new(datatype)).into(),
                None => Literal::new_simple(value).into(),
            },
            kind => return Err(TermDecodeError::UnknownKind(kind.to_owned())),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
