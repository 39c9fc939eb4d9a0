use anyhow::Result;
use axum::{Router, handler::HandlerWithoutStateExt, middleware, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use super::{
    handlers, local,
    state::{AppState, Responder},
};

/// Build the router for a responder. The mode is matched here once; no
/// per-request branching on it happens afterwards.
pub fn router(responder: Responder) -> Router {
    let app = match responder {
        Responder::Local { root } => {
            let files = ServeDir::new(root).not_found_service(handlers::not_found.into_service());
            Router::new()
                .fallback_service(files)
                .layer(middleware::from_fn(local::apply_asset_headers))
        }
        Responder::Remote { gateway } => {
            let app_state = Arc::new(AppState { gateway });
            Router::new()
                .route("/", get(handlers::get_root))
                .route("/*path", get(handlers::get_object))
                .with_state(app_state)
        }
    };

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(responder: Responder, bind_address: &str) -> Result<()> {
    info!("Serving {}", responder.describe());
    let app = router(responder);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
