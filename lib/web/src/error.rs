use crate::render::error_page;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use lodbrowse::BrowseError;

#[derive(thiserror::Error, Debug)]
pub enum LodbrowseServerError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Browse(#[from] BrowseError),
    #[error("Couldn't render page: {0}")]
    Render(#[from] std::fmt::Error),
}

impl LodbrowseServerError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Browse(error) if error.is_endpoint_failure() => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!(
                    "{error}. Refresh to try again.\n\n\
                     You can increase the timeout values in the configuration file."
                ),
            ),
            Self::Browse(error) => (StatusCode::BAD_REQUEST, error.to_string()),
            Self::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        }
    }
}

impl IntoResponse for LodbrowseServerError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("{message}");
        }
        (status, Html(error_page(status, &message))).into_response()
    }
}
