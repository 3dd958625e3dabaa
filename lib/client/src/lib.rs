//! HTTP client for remote SPARQL endpoints.
//!
//! The client only transports bytes: it sends a query and returns the raw response body. Parsing
//! is left to the caller.

mod client;
mod error;
mod format;

pub use client::{EndpointClient, EndpointTimeouts};
pub use error::ClientError;
pub use format::QueryOutputFormat;
