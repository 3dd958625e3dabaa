use crate::{ClientError, QueryOutputFormat};
use bytes::Bytes;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// The two timeout budgets of an [`EndpointClient`].
///
/// `connect` bounds the TCP/TLS setup. `read` bounds every wait for the response once the
/// connection is established, and separately the collection of the whole body. The budgets are
/// never added up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointTimeouts {
    pub connect: Duration,
    pub read: Duration,
}

impl EndpointTimeouts {
    pub fn new(connect: Duration, read: Duration) -> Self {
        Self { connect, read }
    }

    pub fn from_millis(connect: u64, read: u64) -> Self {
        Self::new(Duration::from_millis(connect), Duration::from_millis(read))
    }
}

impl Default for EndpointTimeouts {
    fn default() -> Self {
        Self::from_millis(1_000, 5_000)
    }
}

/// Sends queries to remote SPARQL endpoints.
///
/// Cloning the client is cheap; all clones share the same connection pool, which can be used by
/// any number of concurrent queries. Failed queries are not retried.
#[derive(Clone, Debug)]
pub struct EndpointClient {
    client: reqwest::Client,
    timeouts: EndpointTimeouts,
}

impl EndpointClient {
    /// Creates a client whose every query is bounded by `timeouts`.
    pub fn new(timeouts: EndpointTimeouts) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.read)
            .user_agent(concat!("lodbrowse/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, timeouts })
    }

    pub fn timeouts(&self) -> EndpointTimeouts {
        self.timeouts
    }

    /// Sends `query` to `endpoint` and returns the raw response body.
    ///
    /// The query and the negotiated `format` are passed as URL parameters of a `POST` request.
    /// A response with a non-2xx status is reported as [`ClientError::NonSuccessStatus`] and its
    /// body is dropped.
    pub async fn query(
        &self,
        endpoint: &str,
        query: &str,
        format: QueryOutputFormat,
    ) -> Result<Bytes, ClientError> {
        tracing::debug!(
            endpoint,
            format = format.media_type(),
            "Sending query to SPARQL endpoint"
        );

        let result = self.send(endpoint, query, format).await;
        if let Err(error) = &result {
            tracing::warn!(endpoint, "Query to SPARQL endpoint failed: {error}");
        }
        result
    }

    async fn send(
        &self,
        endpoint: &str,
        query: &str,
        format: QueryOutputFormat,
    ) -> Result<Bytes, ClientError> {
        let response = self
            .client
            .post(endpoint)
            .query(&[("query", query), ("format", format.media_type())])
            .header(ACCEPT, format.media_type())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::NonSuccessStatus(status.as_u16()));
        }

        let body = tokio::time::timeout(self.timeouts.read, response.bytes())
            .await
            .map_err(|_elapsed| ClientError::ReadTimeout)??;
        Ok(body)
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn spawn_endpoint(app: Router) -> std::io::Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move { axum::serve(listener, app).await });
        Ok(format!("http://{addr}/sparql"))
    }

    fn client(connect_ms: u64, read_ms: u64) -> EndpointClient {
        EndpointClient::new(EndpointTimeouts::from_millis(connect_ms, read_ms)).unwrap()
    }

    #[tokio::test]
    async fn query_sends_query_and_format() -> Result<(), Box<dyn std::error::Error>> {
        let app = Router::new().route(
            "/sparql",
            post(
                |Query(params): Query<HashMap<String, String>>, headers: HeaderMap| async move {
                    format!(
                        "{}|{}|{}",
                        params.get("query").cloned().unwrap_or_default(),
                        params.get("format").cloned().unwrap_or_default(),
                        headers
                            .get("accept")
                            .and_then(|value| value.to_str().ok())
                            .unwrap_or_default()
                    )
                },
            ),
        );
        let endpoint = spawn_endpoint(app).await?;

        let body = client(1_000, 1_000)
            .query(&endpoint, "SELECT * WHERE { ?s ?p ?o }", QueryOutputFormat::Rdf)
            .await?;
        assert_eq!(
            body,
            "SELECT * WHERE { ?s ?p ?o }|application/x-trig|application/x-trig"
        );

        let body = client(1_000, 1_000)
            .query(&endpoint, "ASK {}", QueryOutputFormat::from_name("unknown"))
            .await?;
        assert_eq!(
            body,
            "ASK {}|application/sparql-results+json|application/sparql-results+json"
        );
        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_discards_body() -> Result<(), Box<dyn std::error::Error>> {
        let app = Router::new().route(
            "/sparql",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "overloaded, go away") }),
        );
        let endpoint = spawn_endpoint(app).await?;

        let result = client(1_000, 1_000)
            .query(&endpoint, "ASK {}", QueryOutputFormat::Json)
            .await;
        assert_eq!(result, Err(ClientError::NonSuccessStatus(503)));
        Ok(())
    }

    #[tokio::test]
    async fn silent_endpoint_yields_read_timeout() -> Result<(), Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let mut connections = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                connections.push(socket);
            }
        });

        // Connecting succeeds immediately, only the read budget is exceeded.
        let result = client(2_000, 200)
            .query(&format!("http://{addr}/sparql"), "ASK {}", QueryOutputFormat::Json)
            .await;
        assert_eq!(result, Err(ClientError::ReadTimeout));
        Ok(())
    }

    #[tokio::test]
    async fn slow_endpoint_respects_read_timeout() -> Result<(), Box<dyn std::error::Error>> {
        let app = Router::new().route(
            "/sparql",
            post(|| async {
                tokio::time::sleep(Duration::from_millis(300)).await;
                "Too late?"
            }),
        );
        let endpoint = spawn_endpoint(app).await?;

        let result = client(250, 250)
            .query(&endpoint, "ASK {}", QueryOutputFormat::Json)
            .await;
        assert_eq!(result, Err(ClientError::ReadTimeout));

        let body = client(350, 1_000)
            .query(&endpoint, "ASK {}", QueryOutputFormat::Json)
            .await?;
        assert_eq!(body, "Too late?");
        Ok(())
    }

    #[tokio::test]
    async fn trickling_body_yields_read_timeout() -> Result<(), Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await?;
            let mut request = [0; 4096];
            socket.read(&mut request).await?;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 10\r\n\r\n")
                .await?;
            for _ in 0..10 {
                tokio::time::sleep(Duration::from_millis(150)).await;
                socket.write_all(b"x").await?;
            }
            std::io::Result::Ok(())
        });

        // Every single read is well within the budget, the whole body is not.
        let result = client(2_000, 300)
            .query(&format!("http://{addr}/sparql"), "ASK {}", QueryOutputFormat::Json)
            .await;
        assert_eq!(result, Err(ClientError::ReadTimeout));
        Ok(())
    }

    #[tokio::test]
    async fn stalled_handshake_yields_connect_timeout() -> Result<(), Box<dyn std::error::Error>>
    {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let mut connections = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                connections.push(socket);
            }
        });

        // The TCP connection is accepted but the TLS handshake never gets an answer.
        let result = client(200, 2_000)
            .query(&format!("https://{addr}/sparql"), "ASK {}", QueryOutputFormat::Json)
            .await;
        assert_eq!(result, Err(ClientError::ConnectTimeout));
        Ok(())
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_failure() -> Result<(), Box<dyn std::error::Error>>
    {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let result = client(1_000, 1_000)
            .query(&format!("http://{addr}/sparql"), "ASK {}", QueryOutputFormat::Json)
            .await;
        assert!(
            matches!(&result, Err(ClientError::TransportFailure(detail)) if !detail.contains("ASK")),
            "{result:?}"
        );
        Ok(())
    }
}
