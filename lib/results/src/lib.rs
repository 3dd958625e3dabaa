//! Parsing of [SPARQL 1.1 Query Results JSON](https://www.w3.org/TR/sparql11-results-json/)
//! responses into [`Solution`]s of RDF [terms](lodbrowse_model::Term).
//!
//! ```
//! use lodbrowse_results::QueryResults;
//!
//! let raw = br#"{
//!     "head": { "vars": ["s"] },
//!     "results": { "bindings": [ { "s": { "type": "uri", "value": "http://example.com/a" } } ] }
//! }"#;
//! let results = QueryResults::parse(raw)?;
//! let solutions = results.solutions();
//! assert_eq!(solutions[0].get("s").map(ToString::to_string).as_deref(), Some("<http://example.com/a>"));
//! # Result::<_, lodbrowse_results::ParseError>::Ok(())
//! ```

mod error;
mod json;
mod solution;

pub use error::{ParseError, TermDecodeError};
pub use json::{parse, QueryResults, RawBinding, RawRow, ResultsBody, ResultsHead};
pub use solution::Solution;
