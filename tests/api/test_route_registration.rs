// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route registration tests
//!
//! Verifies that:
//! - Both POST endpoints and /health are registered
//! - Endpoints reject wrong HTTP methods
//! - Malformed request bodies produce client errors, not server errors

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use embed_node::{
    api::http_server::{create_app, AppState},
    embeddings::HashEmbedder,
};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

/// Helper: AppState backed by the deterministic hash embedder
fn test_state() -> AppState {
    AppState::new(Arc::new(HashEmbedder::new(384, true).unwrap()))
}

#[tokio::test]
async fn test_vectorize_route_registered() {
    let app = create_app(test_state());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/vectorize")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"sentences": ["test"]}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_semantic_search_route_registered() {
    let app = create_app(test_state());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/semantic_search")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"corpus": ["a", "b"], "query": "q", "num_results": 1, "mode": "number"}"#,
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_route_registered() {
    let app = create_app(test_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["dimension"], 384);
}

#[tokio::test]
async fn test_vectorize_rejects_get() {
    let app = create_app(test_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/vectorize")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_app(test_state());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/nope")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let app = create_app(test_state());

    // Missing required "sentences" field
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/vectorize")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"wrong_field": true}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_wrong_type_is_client_error() {
    let app = create_app(test_state());

    // "corpus" must be an array of strings
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/semantic_search")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"corpus": "not a list", "query": "q"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}
