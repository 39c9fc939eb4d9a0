//! Streaming delivery of proxied objects.
//!
//! The object body is handed to the response as a lazy stream: the backend is
//! only polled for the next chunk when the connection is ready to write it, so
//! memory use is bounded by a single chunk regardless of object size.

use axum::{
    body::Body,
    http::{
        HeaderMap, HeaderName, HeaderValue, StatusCode,
        header::{CACHE_CONTROL, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE, ETAG},
    },
    response::{IntoResponse, Response},
};
use futures::TryStreamExt;
use tracing::{error, info, warn};

use super::error::ProxyResult;
use crate::storage::{MetadataGateway, ObjectMetadata, ResolvedObject};

/// Headers for a full delivery, taken verbatim from the object metadata.
pub fn object_headers(metadata: &ObjectMetadata) -> HeaderMap {
    let mut headers = validator_headers(metadata);
    insert_metadata(&mut headers, CONTENT_TYPE, metadata.content_type.as_deref());
    insert_metadata(
        &mut headers,
        CONTENT_ENCODING,
        metadata.content_encoding.as_deref(),
    );
    if let Some(size) = metadata.size {
        headers.insert(CONTENT_LENGTH, HeaderValue::from(size));
    }
    headers
}

/// 304 response: validator and cache policy only, no content headers.
pub fn not_modified(metadata: &ObjectMetadata) -> Response {
    (StatusCode::NOT_MODIFIED, validator_headers(metadata)).into_response()
}

/// Headers-only answer for `HEAD`; the object stream is never opened.
pub fn head(object: &ResolvedObject) -> Response {
    (StatusCode::OK, object_headers(&object.metadata)).into_response()
}

/// Open the object and stream it to the client unmodified.
///
/// Errors from opening the stream are returned before any byte is sent. A
/// failure after that point cannot change the status line; it is logged and
/// the body errors out, which aborts the connection.
pub async fn deliver(gateway: &MetadataGateway, object: ResolvedObject) -> ProxyResult<Response> {
    let stream = gateway.open(&object).await?;
    let headers = object_headers(&object.metadata);

    info!(
        key = %object.key,
        content_encoding = object.metadata.content_encoding.as_deref(),
        "Streaming object"
    );

    let key = object.key;
    let body = Body::from_stream(stream.inspect_err(move |e| {
        error!(key = %key, error = %e, "Object stream failed mid-response; aborting");
    }));

    Ok((StatusCode::OK, headers, body).into_response())
}

fn validator_headers(metadata: &ObjectMetadata) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert_metadata(&mut headers, ETAG, metadata.etag.as_deref());
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers
}

fn insert_metadata(headers: &mut HeaderMap, name: HeaderName, value: Option<&str>) {
    let Some(value) = value else {
        return;
    };
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(_) => {
            warn!(header = %name, value, "Skipping metadata that is not a valid header value");
        }
    }
}
