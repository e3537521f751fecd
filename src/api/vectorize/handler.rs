// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use axum::{extract::State, Json};
use tracing::{debug, warn};

use super::{VectorizeRequest, VectorizeResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /api/vectorize - Convert sentences to embedding vectors
///
/// Embeds every sentence in the request with the shared model and returns one
/// vector per sentence, in input order. An empty request produces an empty
/// response, not an error. Any embedding failure fails the whole request.
pub async fn vectorize_handler(
    State(state): State<AppState>,
    Json(request): Json<VectorizeRequest>,
) -> Result<Json<VectorizeResponse>, ApiError> {
    debug!(count = request.sentences.len(), "Vectorize request");

    let embeddings = state
        .embedder
        .embed_batch(&request.sentences)
        .await
        .map_err(|e| {
            warn!("Embedding failed: {:#}", e);
            ApiError::InternalError(format!("Embedding failed: {}", e))
        })?;

    Ok(Json(VectorizeResponse { embeddings }))
}
