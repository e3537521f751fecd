// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Cosine similarity and stable top-k selection over corpus embeddings

use serde::{Deserialize, Serialize};

/// A ranked match: position of the sentence in the request corpus plus its
/// cosine similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Zero-based position in the corpus supplied with the request
    pub corpus_id: usize,
    /// Cosine similarity to the query, in [-1, 1]
    pub score: f32,
}

/// Cosine similarity between two vectors
///
/// Returns 0.0 when the vectors differ in length or either has zero norm, so
/// degenerate inputs rank below any genuine match instead of producing NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

/// Scores every corpus vector against the query and returns the `top_k`
/// highest-scoring hits in descending score order
///
/// The sort is stable: equal scores keep their corpus order, so identical
/// inputs always produce identical output. The result is truncated to
/// `min(top_k, corpus.len())`; an empty corpus or `top_k` of zero yields an
/// empty result. A linear scan is sufficient for the corpus sizes this node
/// serves (per-request corpora, ~10k entries at the upper end).
pub fn rank(query: &[f32], corpus: &[Vec<f32>], top_k: usize) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = corpus
        .iter()
        .enumerate()
        .map(|(corpus_id, embedding)| SearchHit {
            corpus_id,
            score: cosine_similarity(query, embedding),
        })
        .collect();

    // Stable descending sort; NaN (only possible from NaN inputs) sorts last
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    hits.truncate(top_k.min(corpus.len()));
    hits
}
