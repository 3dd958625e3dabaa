//! The configuration of a [`Browser`](crate::Browser), loaded from a JSON file.

use crate::ConfigError;
use lodbrowse_client::EndpointTimeouts;
use lodbrowse_view::{NamespaceDictionary, ViewConfig};
use oxiri::Iri;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The complete configuration of the browser.
///
/// ```
/// use lodbrowse::BrowserConfig;
///
/// let config = BrowserConfig::from_json(r#"{
///     "base_uri": "http://data.example.org",
///     "quad_store": { "endpoint": "http://localhost:8890/sparql" }
/// }"#)?;
/// assert_eq!(config.quad_store.results_limit, 100);
/// # Result::<_, lodbrowse::ConfigError>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrowserConfig {
    /// The prefix shared by the URIs of the browsed dataset. Request paths are resolved against it.
    pub base_uri: String,
    #[serde(default = "default_serve_port")]
    pub serve_port: u16,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub license_url: String,
    pub quad_store: QuadStoreConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub vocab: VocabConfig,
}

/// The remote SPARQL endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuadStoreConfig {
    pub endpoint: String,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_open_timeout")]
    pub open_timeout: u64,
    /// Read timeout in milliseconds.
    #[serde(default = "default_read_timeout")]
    pub read_timeout: u64,
    /// The maximum number of quads fetched per resource. Reaching it triggers a count query.
    #[serde(default = "default_results_limit")]
    pub results_limit: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub show_images: bool,
    pub num_images: usize,
    pub image_predicates: Vec<String>,
    pub title_predicates: Vec<String>,
    /// Where requests to `/` are redirected.
    pub root_redirect_to: String,
    pub fetch_literals: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_images: false,
            num_images: 0,
            image_predicates: Vec::new(),
            title_predicates: Vec::new(),
            root_redirect_to: "/".to_owned(),
            fetch_literals: false,
        }
    }
}

/// Namespace compression of displayed URIs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VocabConfig {
    pub enabled: bool,
    pub dict: NamespaceDictionary,
}

fn default_serve_port() -> u16 {
    8080
}

fn default_open_timeout() -> u64 {
    1_000
}

fn default_read_timeout() -> u64 {
    5_000
}

fn default_results_limit() -> usize {
    100
}

impl BrowserConfig {
    /// Reads and validates the configuration file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Parses and validates a configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_uri.is_empty() {
            return Err(ConfigError::Invalid("base_uri must not be empty".to_owned()));
        }
        if let Err(error) = Iri::parse(self.base_uri.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "base_uri '{}' is not an absolute IRI: {error}",
                self.base_uri
            )));
        }
        if self.quad_store.endpoint.is_empty() {
            return Err(ConfigError::Invalid(
                "quad_store.endpoint must not be empty".to_owned(),
            ));
        }
        if self.quad_store.results_limit == 0 {
            return Err(ConfigError::Invalid(
                "quad_store.results_limit must be positive".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn timeouts(&self) -> EndpointTimeouts {
        EndpointTimeouts::from_millis(self.quad_store.open_timeout, self.quad_store.read_timeout)
    }

    /// The configuration of the projection layer.
    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            base_uri: self.base_uri.clone(),
            namespaces: self.vocab.enabled.then(|| self.vocab.dict.clone()),
            preview_namespaces: self.vocab.dict.clone(),
            title_predicates: self.ui.title_predicates.clone(),
            image_predicates: self.ui.image_predicates.clone(),
            max_images: self.ui.num_images,
            show_images: self.ui.show_images,
            fetch_literals: self.ui.fetch_literals,
        }
    }
}
