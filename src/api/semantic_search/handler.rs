// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use super::request::{SearchMode, SemanticSearchRequest};
use super::response::SearchResultEntry;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::vector;

/// POST /api/semantic_search - Rank a corpus by similarity to a query
///
/// Embeds the query and every corpus sentence, scores each candidate with
/// cosine similarity, and returns the top `num_results` entries in descending
/// score order, shaped per the request `mode`.
///
/// # Edge behavior
/// - Empty corpus: empty result list, not an error
/// - `num_results` above corpus length: silently clamped
/// - `num_results` zero or negative: empty result list
/// - Unrecognized `mode`: 400 with an `invalid_mode` payload
pub async fn semantic_search_handler(
    State(state): State<AppState>,
    Json(request): Json<SemanticSearchRequest>,
) -> Result<Json<Vec<SearchResultEntry>>, ApiError> {
    debug!(
        corpus_len = request.corpus.len(),
        num_results = request.num_results,
        mode = %request.mode,
        "Semantic search request"
    );

    // Reject bad modes before spending inference time on the corpus
    let mode = SearchMode::parse(&request.mode)?;

    let top_k = request.effective_num_results();
    if top_k == 0 {
        return Ok(Json(vec![]));
    }

    let query_embedding = state.embedder.embed(&request.query).await.map_err(|e| {
        warn!("Query embedding failed: {:#}", e);
        ApiError::InternalError(format!("Embedding failed: {}", e))
    })?;

    let corpus_embeddings = state
        .embedder
        .embed_batch(&request.corpus)
        .await
        .map_err(|e| {
            warn!("Corpus embedding failed: {:#}", e);
            ApiError::InternalError(format!("Embedding failed: {}", e))
        })?;

    let hits = vector::rank(&query_embedding, &corpus_embeddings, top_k);

    info!(
        results = hits.len(),
        corpus_len = request.corpus.len(),
        "Semantic search complete"
    );

    Ok(Json(SearchResultEntry::shape(&hits, &request.corpus, mode)))
}
