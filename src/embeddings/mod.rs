//! Embedding backends
//!
//! The HTTP layer depends on the [`TextEmbedder`] trait rather than a concrete
//! backend. Production serving uses [`OnnxEmbeddingModel`]; [`HashEmbedder`]
//! provides deterministic vectors when no model files are available.

mod onnx_model;

pub use onnx_model::OnnxEmbeddingModel;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A text-to-vector embedding backend
///
/// Implementations must be deterministic for a fixed model: the same input
/// text always yields the same vector.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Embeds a single text into a fixed-length vector
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embeds a batch of texts, one vector per input, input order preserved
    ///
    /// An empty input slice yields an empty output.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Output dimension of every produced vector
    fn dimension(&self) -> usize;

    /// Model identifier
    fn model_name(&self) -> &str;
}

/// Deterministic embedding generator seeded from the text hash
///
/// Vectors carry no semantic meaning; the generator exists so the ranking and
/// HTTP layers can run without model files on disk.
pub struct HashEmbedder {
    model_name: String,
    dimension: usize,
    normalize: bool,
}

impl HashEmbedder {
    pub fn new(dimension: usize, normalize: bool) -> Result<Self> {
        if dimension == 0 {
            return Err(anyhow!("Embedding dimension must be greater than 0"));
        }
        Ok(Self {
            model_name: "hash-embedder".to_string(),
            dimension,
            normalize,
        })
    }

    fn generate(&self, text: &str) -> Vec<f32> {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut embedding = Vec::with_capacity(self.dimension);

        // Linear congruential generator, seeded per text
        let mut current_seed = seed;
        for i in 0..self.dimension {
            current_seed =
                (current_seed.wrapping_mul(1664525).wrapping_add(1013904223)) ^ (i as u64);

            // Map into [-1, 1]
            let value = (current_seed as f64 / u64::MAX as f64) * 2.0 - 1.0;
            embedding.push(value as f32);
        }

        if self.normalize {
            let norm = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
            if norm > 0.0 {
                for value in &mut embedding {
                    *value /= norm;
                }
            }
        }

        embedding
    }
}

#[async_trait]
impl TextEmbedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.generate(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|text| self.generate(text)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
