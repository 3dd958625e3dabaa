/// An error raised while querying a remote SPARQL endpoint.
///
/// All variants describe an endpoint that is unavailable for now. The client never retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The connection could not be established within the connect timeout.
    #[error("SPARQL endpoint connection timed out")]
    ConnectTimeout,
    /// The response was not received within the read timeout.
    #[error("HTTP request to remote SPARQL endpoint timed out")]
    ReadTimeout,
    /// The endpoint answered with a status other than 2xx. The body is discarded.
    #[error("SPARQL endpoint responded with HTTP status code: {0}")]
    NonSuccessStatus(u16),
    /// Any other failure of the transport.
    #[error("{0}")]
    TransportFailure(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            if error.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::ReadTimeout
            }
        } else {
            // The URL carries the query text; keep it out of the message.
            Self::TransportFailure(error.without_url().to_string())
        }
    }
}
