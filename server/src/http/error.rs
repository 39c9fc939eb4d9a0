use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, error};

use crate::storage::StorageError;

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate<'a> {
    path: &'a str,
}

#[derive(Template)]
#[template(path = "unavailable.html")]
struct UnavailableTemplate;

/// Per-request failure, rendered as a short HTML fragment.
#[derive(Debug)]
pub enum ProxyError {
    NotFound(String),
    BackendUnavailable(StorageError),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::NotFound(path) => {
                debug!(path = %path, "Responding 404");
                render_page(StatusCode::NOT_FOUND, &NotFoundTemplate { path: &path })
            }
            ProxyError::BackendUnavailable(err) => {
                error!(
                    error = %err,
                    source = ?std::error::Error::source(&err),
                    "Storage request failed"
                );
                render_page(StatusCode::INTERNAL_SERVER_ERROR, &UnavailableTemplate)
            }
        }
    }
}

fn render_page(status: StatusCode, template: &impl Template) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render error page");
            status.into_response()
        }
    }
}

impl From<StorageError> for ProxyError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(key) => ProxyError::NotFound(key),
            other => ProxyError::BackendUnavailable(other),
        }
    }
}

pub type ProxyResult<T> = Result<T, ProxyError>;
