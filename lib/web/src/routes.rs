use crate::error::LodbrowseServerError;
use crate::render::resource_page;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use lodbrowse::BrowseOutcome;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.[a-z1-9]+$").unwrap());

/// A `302 Found` redirect. [`axum::response::Redirect`] only offers 303, 307 and 308.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_owned())]).into_response()
}

pub async fn handle_root(State(state): State<AppState>) -> Response {
    found(&state.meta.root_redirect_to)
}

#[derive(Debug, Default, Deserialize)]
pub struct LiteralsParams {
    #[serde(default)]
    uri: String,
}

pub async fn handle_literals(
    State(state): State<AppState>,
    Query(params): Query<LiteralsParams>,
) -> Result<Response, LodbrowseServerError> {
    Ok(match state.browser.literal_preview(&params.uri).await? {
        Some(table) => Html(table.into_string()).into_response(),
        None => "No literals on resource".into_response(),
    })
}

/// Serves a resource in the format selected by the suffix of the path.
///
/// The resource URI is built from the percent-decoded path. Paths without a suffix are
/// redirected to their HTML page.
pub async fn handle_resource(
    State(state): State<AppState>,
    Path(path): Path<String>,
    uri: Uri,
) -> Result<Response, LodbrowseServerError> {
    let Some(suffix) = SUFFIX.find(&path) else {
        return Ok(found(&format!("{}.html", uri.path())));
    };
    let resource_path = format!("/{}", path[..suffix.start()].trim_start_matches('/'));
    let resource = state.browser.resource_uri(&resource_path);
    // Links on the page keep the encoding of the request.
    let link_path = uri
        .path()
        .strip_suffix(suffix.as_str())
        .unwrap_or(&resource_path);

    match suffix.as_str() {
        ".html" => match state.browser.describe(&resource).await? {
            BrowseOutcome::Found(page) => {
                Ok(Html(resource_page(&page, link_path, &state.meta)?).into_response())
            }
            BrowseOutcome::NotFound => Err(LodbrowseServerError::NotFound(
                "This URI has no information".to_owned(),
            )),
        },
        ".json" => {
            let body = state.browser.results_json(&resource).await?;
            Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
        }
        ".rdf" => {
            let body = state.browser.quads(&resource).await?;
            Ok(([(CONTENT_TYPE, "application/x-trig")], body).into_response())
        }
        other => Err(LodbrowseServerError::BadRequest(format!(
            "Unsupported output format: {}.\n\nValid formats are: html, json, rdf",
            &other[1..]
        ))),
    }
}
