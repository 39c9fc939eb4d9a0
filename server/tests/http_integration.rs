#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use origin_server::config::{ServeMode, ServerConfig};
use origin_server::http::{Responder, router};
use std::fs;
use tempfile::TempDir;
use tower::util::ServiceExt;

const GZIP_BYTES: &[u8] = b"\x1f\x8b\x08\x00\x00\x00\x00\x00\x00\x03data";

fn create_test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let build = temp_dir.path().join("Build");
    fs::create_dir(&build).unwrap();

    fs::write(temp_dir.path().join("index.html"), "<html>player</html>").unwrap();
    fs::write(build.join("app.wasm"), b"\0asm\x01\0\0\0").unwrap();
    fs::write(build.join("app.data.gz"), GZIP_BYTES).unwrap();
    fs::write(build.join("app.js.br"), b"\x0b\x02\x80brotli").unwrap();
    fs::write(temp_dir.path().join("style.css"), "body {}").unwrap();

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        build_path: temp_dir.path().to_str().unwrap().to_string(),
    };
    let mode = config.serve_mode().unwrap();
    let app = router(Responder::from_mode(mode).unwrap());

    (app, temp_dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_wasm_content_type() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/Build/app.wasm")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/wasm");
    assert!(response.headers().get("content-encoding").is_none());
}

#[tokio::test]
async fn test_gzip_data_served_as_is() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/Build/app.data.gz")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-encoding"], "gzip");
    assert_eq!(response.headers()["content-type"], "application/octet-stream");

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    assert_eq!(&body[..], GZIP_BYTES);
}

#[tokio::test]
async fn test_brotli_js() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/Build/app.js.br")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-encoding"], "br");
    assert_eq!(response.headers()["content-type"], "application/javascript");
}

#[tokio::test]
async fn test_root_serves_index() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], b"<html>player</html>");
}

#[tokio::test]
async fn test_other_files_keep_default_type() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/style.css")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/css"));
}

#[tokio::test]
async fn test_missing_file_is_404() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/Build/missing.js.gz")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    // Asset overrides only apply to files that were found
    assert!(response.headers().get("content-encoding").is_none());

    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("missing.js.gz"));
}

#[tokio::test]
async fn test_cors_headers() {
    let (app, _dir) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/Build/app.wasm")
                .header("origin", "https://games.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_memory_locator_serves_remote_mode() {
    let mode = ServeMode::Remote {
        locator: origin_server::storage::StorageLocator::parse("memory://bucket/web").unwrap(),
    };
    let app = router(Responder::from_mode(mode).unwrap());

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("index.html"));
}
