use crate::{queries, BrowseError, BrowserConfig};
use bytes::Bytes;
use lodbrowse_client::{EndpointClient, QueryOutputFormat};
use lodbrowse_model::{NativeValue, Term};
use lodbrowse_results::QueryResults;
use lodbrowse_view::{DisplayRow, Markup, Projection, Role};
use serde::Serialize;

/// A resource as presented to the user.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResourcePage {
    pub uri: String,
    pub title: Option<String>,
    /// Rows in which the resource is the subject.
    pub as_subject: Vec<DisplayRow>,
    /// Rows in which the resource is the object.
    pub as_object: Vec<DisplayRow>,
    pub images: Vec<String>,
    /// The number of quads with the resource as subject, if the rows were truncated. Zero
    /// otherwise, or if counting failed.
    pub subject_total: usize,
    /// Same as `subject_total` for quads with the resource as object.
    pub object_total: usize,
}

impl ResourcePage {
    /// Returns whether the rows are a truncated view of the quads of the resource.
    pub fn is_truncated(&self) -> bool {
        self.subject_total > self.as_subject.len() || self.object_total > self.as_object.len()
    }
}

/// The result of [`Browser::describe`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BrowseOutcome {
    /// The endpoint knows nothing about the resource.
    NotFound,
    Found(ResourcePage),
}

/// Browses the resources of a remote SPARQL endpoint.
///
/// A browser only holds immutable configuration and a connection pool. It can be shared between
/// any number of concurrent requests.
#[derive(Clone, Debug)]
pub struct Browser {
    client: EndpointClient,
    projection: Projection,
    endpoint: String,
    base_uri: String,
    results_limit: usize,
}

impl Browser {
    pub fn new(config: &BrowserConfig) -> Result<Self, BrowseError> {
        Ok(Self {
            client: EndpointClient::new(config.timeouts())?,
            projection: Projection::new(config.view_config()),
            endpoint: config.quad_store.endpoint.clone(),
            base_uri: config.base_uri.clone(),
            results_limit: config.quad_store.results_limit,
        })
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resolves a request path to the URI of a resource of the dataset.
    pub fn resource_uri(&self, path: &str) -> String {
        format!("{}{path}", self.base_uri)
    }

    /// Fetches everything the endpoint knows about `uri` and projects it into a page.
    ///
    /// If the number of rows reaches the results limit, the totals are fetched with an additional
    /// count query. A failing count query is logged and leaves the totals at zero.
    pub async fn describe(&self, uri: &str) -> Result<BrowseOutcome, BrowseError> {
        let query = queries::select(uri, self.results_limit)?;
        let body = self
            .client
            .query(&self.endpoint, &query, QueryOutputFormat::Json)
            .await?;
        let results = QueryResults::parse(&body)?;
        if results.is_empty() {
            tracing::debug!(uri, "Resource not found");
            return Ok(BrowseOutcome::NotFound);
        }

        let (subject_total, object_total) = if results.len() >= self.results_limit {
            self.count(uri).await
        } else {
            (0, 0)
        };

        let solutions = results.solutions();
        Ok(BrowseOutcome::Found(ResourcePage {
            uri: uri.to_owned(),
            title: self.projection.find_title(&solutions),
            as_subject: self.projection.partition_by_role(Role::Subject, &solutions),
            as_object: self.projection.partition_by_role(Role::Object, &solutions),
            images: self.projection.find_images(&solutions),
            subject_total,
            object_total,
        }))
    }

    /// Returns the unparsed SPARQL results JSON of the rows describing `uri`.
    pub async fn results_json(&self, uri: &str) -> Result<Bytes, BrowseError> {
        let query = queries::select(uri, self.results_limit)?;
        Ok(self
            .client
            .query(&self.endpoint, &query, QueryOutputFormat::Json)
            .await?)
    }

    /// Returns the quads describing `uri`, serialized as TriG by the endpoint.
    pub async fn quads(&self, uri: &str) -> Result<Bytes, BrowseError> {
        let query = queries::construct(uri)?;
        Ok(self
            .client
            .query(&self.endpoint, &query, QueryOutputFormat::Rdf)
            .await?)
    }

    /// Renders the literal properties of `uri` as a preview table.
    ///
    /// Returns `None` if the resource has no literal property.
    pub async fn literal_preview(&self, uri: &str) -> Result<Option<Markup>, BrowseError> {
        let query = queries::literals(uri)?;
        let body = self
            .client
            .query(&self.endpoint, &query, QueryOutputFormat::Json)
            .await?;
        let results = QueryResults::parse(&body)?;
        if results.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.projection.literal_table(&results.solutions())))
    }

    async fn count(&self, uri: &str) -> (usize, usize) {
        match self.try_count(uri).await {
            Ok(totals) => totals,
            Err(error) => {
                tracing::warn!(uri, "Counting quads failed, reporting no totals: {error}");
                (0, 0)
            }
        }
    }

    async fn try_count(&self, uri: &str) -> Result<(usize, usize), CountError> {
        let query = queries::count(uri)?;
        let body = self
            .client
            .query(&self.endpoint, &query, QueryOutputFormat::Json)
            .await
            .map_err(BrowseError::from)?;
        let results = QueryResults::parse(&body).map_err(BrowseError::from)?;
        let solutions = results.solutions();
        let totals = solutions.first().ok_or(CountError::MissingTotal("maxS"))?;
        Ok((
            total(totals.get("maxS"), "maxS")?,
            total(totals.get("maxO"), "maxO")?,
        ))
    }
}

fn total(term: Option<&Term>, variable: &'static str) -> Result<usize, CountError> {
    let literal = term
        .and_then(Term::as_literal)
        .ok_or(CountError::MissingTotal(variable))?;
    let total = match literal.value() {
        NativeValue::String(lexical) => lexical.trim().parse().ok(),
        NativeValue::Int(value) => usize::try_from(*value).ok(),
        NativeValue::Boolean(_) | NativeValue::Float(_) => None,
    };
    total.ok_or_else(|| CountError::InvalidTotal(literal.to_string()))
}

#[derive(Debug, thiserror::Error)]
enum CountError {
    #[error(transparent)]
    Browse(#[from] BrowseError),
    #[error("no value for ?{0}")]
    MissingTotal(&'static str),
    #[error("{0} is not a count")]
    InvalidTotal(String),
}
