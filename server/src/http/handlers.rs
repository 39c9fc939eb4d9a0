use axum::{
    extract::{Path, State},
    http::{HeaderMap, Method, Uri, header::IF_NONE_MATCH},
    response::Response,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    conditional::{Evaluation, evaluate},
    delivery,
    error::{ProxyError, ProxyResult},
    state::AppState,
};

/// GET /
/// Serve the build's index.html
#[instrument(skip(state, headers))]
pub async fn get_root(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
) -> ProxyResult<Response> {
    serve_object(&state, "/", &method, &headers).await
}

/// GET /*path
/// Proxy a single object from the bucket
#[instrument(skip(state, headers))]
pub async fn get_object(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    method: Method,
    headers: HeaderMap,
) -> ProxyResult<Response> {
    serve_object(&state, &format!("/{path}"), &method, &headers).await
}

async fn serve_object(
    state: &AppState,
    request_path: &str,
    method: &Method,
    headers: &HeaderMap,
) -> ProxyResult<Response> {
    let object = state.gateway.resolve(request_path).await?;

    let validator = headers.get(IF_NONE_MATCH).and_then(|v| v.to_str().ok());
    if evaluate(validator, &object.metadata) == Evaluation::NotModified {
        info!(key = %object.key, "Not modified");
        return Ok(delivery::not_modified(&object.metadata));
    }

    if method == Method::HEAD {
        return Ok(delivery::head(&object));
    }

    delivery::deliver(&state.gateway, object).await
}

/// Fallback for files missing from the local build directory
pub async fn not_found(uri: Uri) -> ProxyError {
    ProxyError::NotFound(uri.path().to_string())
}
