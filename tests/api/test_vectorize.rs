// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Behavior tests for POST /api/vectorize

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
};
use embed_node::{
    api::http_server::{create_app, AppState},
    embeddings::HashEmbedder,
};
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_state() -> AppState {
    AppState::new(Arc::new(HashEmbedder::new(384, true).unwrap()))
}

async fn post_vectorize(body: &str) -> Response {
    let app = create_app(test_state());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/vectorize")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_one_vector_per_sentence() {
    let response = post_vectorize(r#"{"sentences": ["one", "two", "three"]}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let embeddings = json["embeddings"].as_array().unwrap();
    assert_eq!(embeddings.len(), 3);
    for embedding in embeddings {
        assert_eq!(embedding.as_array().unwrap().len(), 384);
    }
}

#[tokio::test]
async fn test_empty_sentences_yields_empty_embeddings() {
    let response = post_vectorize(r#"{"sentences": []}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["embeddings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_order_preserved() {
    // The hash embedder is deterministic per text, so comparing against
    // single-sentence requests pins the batch output order.
    let batch = post_vectorize(r#"{"sentences": ["alpha", "beta"]}"#).await;
    let batch_json = body_json(batch).await;

    let alpha = post_vectorize(r#"{"sentences": ["alpha"]}"#).await;
    let alpha_json = body_json(alpha).await;
    let beta = post_vectorize(r#"{"sentences": ["beta"]}"#).await;
    let beta_json = body_json(beta).await;

    assert_eq!(batch_json["embeddings"][0], alpha_json["embeddings"][0]);
    assert_eq!(batch_json["embeddings"][1], beta_json["embeddings"][0]);
}

#[tokio::test]
async fn test_empty_string_sentence_embeds() {
    let response = post_vectorize(r#"{"sentences": [""]}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["embeddings"][0].as_array().unwrap().len(), 384);
}

#[tokio::test]
async fn test_identical_requests_identical_output() {
    let first = body_json(post_vectorize(r#"{"sentences": ["same input"]}"#).await).await;
    let second = body_json(post_vectorize(r#"{"sentences": ["same input"]}"#).await).await;
    assert_eq!(first, second);
}
