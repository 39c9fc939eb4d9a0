//! Local build directory serving.
//!
//! Files are served by `ServeDir`; [`apply_asset_headers`] then overrides the
//! guessed headers for compressed and binary player assets so a browser
//! receives `app.wasm.gz` as gzip-encoded `application/wasm` rather than as an
//! `application/gzip` download.

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{CONTENT_ENCODING, CONTENT_TYPE},
    },
    middleware::Next,
    response::Response,
};

const WASM: &str = "application/wasm";
const JAVASCRIPT: &str = "application/javascript";
const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetHeaders {
    pub content_type: Option<&'static str>,
    pub content_encoding: Option<&'static str>,
}

/// Derive headers from the file name alone. `None` fields leave whatever
/// the file service chose in place.
pub fn classify(path: &str) -> AssetHeaders {
    let name = path.rsplit('/').next().unwrap_or(path);

    let encoding = if name.ends_with(".gz") {
        Some("gzip")
    } else if name.ends_with(".br") {
        Some("br")
    } else {
        None
    };

    if let Some(encoding) = encoding {
        return AssetHeaders {
            content_type: Some(inner_content_type(name)),
            content_encoding: Some(encoding),
        };
    }

    let content_type = if name.ends_with(".wasm") {
        Some(WASM)
    } else if name.ends_with(".js") {
        Some(JAVASCRIPT)
    } else if name.ends_with(".data") || name.ends_with(".unityweb") {
        Some(OCTET_STREAM)
    } else {
        None
    };

    AssetHeaders {
        content_type,
        content_encoding: None,
    }
}

// Type of the payload inside a compressed file, from the extension before the
// compression suffix.
fn inner_content_type(name: &str) -> &'static str {
    if name.contains(".wasm.") {
        WASM
    } else if name.contains(".js.") {
        JAVASCRIPT
    } else {
        OCTET_STREAM
    }
}

/// Response middleware overriding `Content-Type`/`Content-Encoding` on
/// successful file responses.
pub async fn apply_asset_headers(request: Request, next: Next) -> Response {
    let asset = classify(request.uri().path());
    let mut response = next.run(request).await;

    if response.status().is_success() {
        let headers = response.headers_mut();
        if let Some(content_type) = asset.content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        if let Some(content_encoding) = asset.content_encoding {
            headers.insert(CONTENT_ENCODING, HeaderValue::from_static(content_encoding));
        }
    }

    response
}
