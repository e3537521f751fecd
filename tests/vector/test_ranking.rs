// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Ranking contract tests over the deterministic hash embedder
//!
//! The in-file unit tests cover the raw math; these pin the end-to-end
//! contract between the embedder and the ranker.

use embed_node::{
    embeddings::{HashEmbedder, TextEmbedder},
    vector::{cosine_similarity, rank},
};

async fn embed_corpus(embedder: &HashEmbedder, corpus: &[&str]) -> Vec<Vec<f32>> {
    let owned: Vec<String> = corpus.iter().map(|s| s.to_string()).collect();
    embedder.embed_batch(&owned).await.unwrap()
}

#[tokio::test]
async fn test_query_matching_corpus_entry_scores_highest() {
    let embedder = HashEmbedder::new(384, true).unwrap();
    let corpus = embed_corpus(&embedder, &["red", "green", "blue"]).await;
    let query = embedder.embed("green").await.unwrap();

    let hits = rank(&query, &corpus, 3);
    assert_eq!(hits[0].corpus_id, 1);
    assert!((hits[0].score - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn test_never_more_hits_than_corpus() {
    let embedder = HashEmbedder::new(384, true).unwrap();
    let corpus = embed_corpus(&embedder, &["one", "two"]).await;
    let query = embedder.embed("query").await.unwrap();

    for top_k in [0usize, 1, 2, 3, 100] {
        let hits = rank(&query, &corpus, top_k);
        assert!(hits.len() <= 2);
        assert_eq!(hits.len(), top_k.min(2));
    }
}

#[tokio::test]
async fn test_ranking_is_deterministic() {
    let embedder = HashEmbedder::new(384, true).unwrap();
    let corpus = embed_corpus(&embedder, &["w", "x", "y", "z"]).await;
    let query = embedder.embed("x").await.unwrap();

    let first = rank(&query, &corpus, 4);
    let second = rank(&query, &corpus, 4);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_scores_match_pairwise_cosine() {
    let embedder = HashEmbedder::new(128, true).unwrap();
    let texts = ["alpha", "beta", "gamma"];
    let corpus = embed_corpus(&embedder, &texts).await;
    let query = embedder.embed("delta").await.unwrap();

    let hits = rank(&query, &corpus, 3);
    for hit in hits {
        let expected = cosine_similarity(&query, &corpus[hit.corpus_id]);
        assert_eq!(hit.score, expected);
    }
}
