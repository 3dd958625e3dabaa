//! The queries sent to the endpoint when browsing a resource.
//!
//! Every query takes the IRI of the browsed resource. It is validated before being spliced into
//! the query text so that it cannot alter the query.

use crate::BrowseError;
use oxiri::Iri;

/// All quads in which `uri` is the subject or the object, at most `limit` of them.
///
/// Rows where the resource is the subject bind `?o`, rows where it is the object bind `?s`.
pub fn select(uri: &str, limit: usize) -> Result<String, BrowseError> {
    let uri = validate(uri)?;
    Ok(format!(
        "SELECT *\n\
         WHERE {{ GRAPH ?g {{ {{ <{uri}> ?p ?o }} UNION {{ ?s ?p <{uri}> }} }} }}\n\
         LIMIT {limit}"
    ))
}

/// Counts the quads of [`select`] without a limit.
///
/// `?maxS` is the number of quads with `uri` as subject and `?maxO` the number with `uri` as
/// object.
pub fn count(uri: &str) -> Result<String, BrowseError> {
    let uri = validate(uri)?;
    Ok(format!(
        "SELECT (COUNT(?s) AS ?maxO) (COUNT(?o) AS ?maxS)\n\
         WHERE {{ GRAPH ?g {{ {{ <{uri}> ?p ?o }} UNION {{ ?s ?p <{uri}> }} }} }}"
    ))
}

/// The quads of [`select`] as a dataset, to be serialized as TriG by the endpoint.
pub fn construct(uri: &str) -> Result<String, BrowseError> {
    let uri = validate(uri)?;
    Ok(format!(
        "CONSTRUCT {{ GRAPH ?g {{ <{uri}> ?p ?o . ?s ?p <{uri}> }} }}\n\
         WHERE {{ GRAPH ?g {{ {{ <{uri}> ?p ?o }} UNION {{ ?s ?p <{uri}> }} }} }}"
    ))
}

/// The distinct literal properties of `uri`.
pub fn literals(uri: &str) -> Result<String, BrowseError> {
    let uri = validate(uri)?;
    Ok(format!(
        "SELECT DISTINCT ?p ?o\n\
         WHERE {{ <{uri}> ?p ?o .\n        FILTER isLiteral(?o) }}"
    ))
}

fn validate(uri: &str) -> Result<&str, BrowseError> {
    Iri::parse(uri)
        .map(|iri| iri.into_inner())
        .map_err(|error| BrowseError::InvalidResource {
            iri: uri.to_owned(),
            error,
        })
}
