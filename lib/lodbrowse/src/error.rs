use lodbrowse_client::ClientError;
use lodbrowse_results::ParseError;
use oxiri::IriParseError;
use std::io;

/// An error raised while browsing a resource.
#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    /// The resource is not identified by an absolute IRI.
    #[error("Invalid resource IRI '{iri}': {error}")]
    InvalidResource {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// The endpoint could not be queried.
    #[error(transparent)]
    Endpoint(#[from] ClientError),
    /// The endpoint answered with a document that is not SPARQL results JSON.
    #[error("Failed to parse JSON response from remote SPARQL endpoint: {0}")]
    Parse(#[from] ParseError),
}

impl BrowseError {
    /// Returns whether the error means that the endpoint is unavailable for now and the request
    /// may succeed if it is retried later.
    pub fn is_endpoint_failure(&self) -> bool {
        matches!(self, Self::Endpoint(_) | Self::Parse(_))
    }
}

/// An error raised while loading a [`BrowserConfig`](crate::BrowserConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Couldn't read config file: {0}")]
    Io(#[from] io::Error),
    #[error("Couldn't parse config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
