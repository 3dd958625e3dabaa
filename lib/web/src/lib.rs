use axum::routing::get;
use axum::Router;
use lodbrowse::{BrowseError, Browser, BrowserConfig};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod render;
mod routes;

pub use config::ServerConfig;
pub use error::LodbrowseServerError;

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from_str(&config.bind)?;
    let app = create_router(AppState::new(&config.browser)?);

    let app = if config.cors {
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        endpoint = %config.browser.quad_store.endpoint,
        "Listening on {addr}"
    );
    Ok(axum::serve(listener, app).await?)
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::handle_root))
        .route("/literals", get(routes::handle_literals))
        .route("/{*path}", get(routes::handle_resource))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub browser: Arc<Browser>,
    pub meta: Arc<PageMetadata>,
}

impl AppState {
    pub fn new(config: &BrowserConfig) -> Result<Self, BrowseError> {
        Ok(Self {
            browser: Arc::new(Browser::new(config)?),
            meta: Arc::new(PageMetadata::from(config)),
        })
    }
}

/// What the pages show besides the resource itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub base_uri: String,
    pub endpoint: String,
    pub license: String,
    pub license_url: String,
    pub root_redirect_to: String,
    pub fetch_literals: bool,
}

impl From<&BrowserConfig> for PageMetadata {
    fn from(config: &BrowserConfig) -> Self {
        Self {
            base_uri: config.base_uri.clone(),
            endpoint: config.quad_store.endpoint.clone(),
            license: config.license.clone(),
            license_url: config.license_url.clone(),
            root_redirect_to: config.ui.root_redirect_to.clone(),
            fetch_literals: config.ui.fetch_literals,
        }
    }
}
