//! Router construction and server startup

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::embeddings::TextEmbedder;

/// Shared state for all request handlers
///
/// Holds the single read-only embedding model loaded at startup. It is never
/// mutated after construction, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub embedder: Arc<dyn TextEmbedder>,
}

impl AppState {
    pub fn new(embedder: Arc<dyn TextEmbedder>) -> Self {
        Self { embedder }
    }
}

/// Builds the application router
///
/// Exposed separately from [`start_server`] so tests can drive routes with
/// `tower::ServiceExt::oneshot` without binding a socket.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/vectorize", post(super::vectorize_handler))
        .route("/api/semantic_search", post(super::semantic_search_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until the process exits
pub async fn start_server(
    config: &ServerConfig,
    embedder: Arc<dyn TextEmbedder>,
) -> anyhow::Result<()> {
    let app = create_app(AppState::new(embedder));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(json!({
        "status": "healthy",
        "model": state.embedder.model_name(),
        "dimension": state.embedder.dimension(),
    }))
}
