// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX Runtime wrapper for the all-MiniLM-L6-v2 sentence transformer
//!
//! Loads the model and BERT tokenizer from disk, runs inference, and applies
//! attention-mask mean pooling over the token-level output to produce
//! 384-dimensional sentence embeddings.

use anyhow::{Context, Result};
use async_trait::async_trait;
use ndarray::{Array2, Axis};
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokenizers::Tokenizer;
use tracing::info;

use super::TextEmbedder;

/// Embedding dimension of all-MiniLM-L6-v2
const EMBEDDING_DIM: usize = 384;

/// ONNX-based sentence embedding model
///
/// The session is held behind `Arc<Mutex>` so the model can be shared across
/// request handlers; the model itself is never mutated after load.
#[derive(Clone)]
pub struct OnnxEmbeddingModel {
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
    model_name: String,
    dimension: usize,
}

impl std::fmt::Debug for OnnxEmbeddingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxEmbeddingModel")
            .field("model_name", &self.model_name)
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl OnnxEmbeddingModel {
    /// Loads the model and tokenizer from disk
    ///
    /// Runs a probe inference to verify the model outputs token-level
    /// embeddings of shape `[batch, seq_len, 384]`. Any failure here is fatal
    /// to the caller: the node refuses to serve without a working model.
    pub async fn new<P: AsRef<Path>>(
        model_name: impl Into<String>,
        model_path: P,
        tokenizer_path: P,
    ) -> Result<Self> {
        let model_name = model_name.into();
        let model_path = model_path.as_ref();
        let tokenizer_path = tokenizer_path.as_ref();

        if !model_path.exists() {
            anyhow::bail!("ONNX model file not found: {}", model_path.display());
        }
        if !tokenizer_path.exists() {
            anyhow::bail!("Tokenizer file not found: {}", tokenizer_path.display());
        }

        let mut session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .context(format!(
                "Failed to load ONNX model from {}",
                model_path.display()
            ))?;

        let tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

        // Probe inference: verify output shape before accepting the model.
        // Scoped so the borrowed outputs drop before session moves.
        {
            let encoding = tokenizer
                .encode("validation probe", true)
                .map_err(|e| anyhow::anyhow!("Tokenizer validation failed: {}", e))?;

            let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
            let attention_mask: Vec<i64> = encoding
                .get_attention_mask()
                .iter()
                .map(|&m| m as i64)
                .collect();
            let token_type_ids = vec![0i64; input_ids.len()];

            let seq_len = input_ids.len();
            let outputs = session.run(ort::inputs![
                "input_ids" => Value::from_array(
                    Array2::from_shape_vec((1, seq_len), input_ids)
                        .context("Failed to create input_ids array")?
                )?,
                "attention_mask" => Value::from_array(
                    Array2::from_shape_vec((1, seq_len), attention_mask)
                        .context("Failed to create attention_mask array")?
                )?,
                "token_type_ids" => Value::from_array(
                    Array2::from_shape_vec((1, seq_len), token_type_ids)
                        .context("Failed to create token_type_ids array")?
                )?
            ])?;

            // Output index 0, not name: output names vary between exports
            let output_tensor = outputs[0]
                .try_extract_array::<f32>()
                .context("Failed to extract output tensor")?;
            let output_shape = output_tensor.shape();

            if output_shape.len() != 3 || output_shape[2] != EMBEDDING_DIM {
                anyhow::bail!(
                    "Model outputs unexpected dimensions: {:?} (expected [batch, seq_len, {}])",
                    output_shape,
                    EMBEDDING_DIM
                );
            }
        }

        info!(model = %model_name, dimension = EMBEDDING_DIM, "ONNX embedding model loaded");

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            model_name,
            dimension: EMBEDDING_DIM,
        })
    }

    /// Tokenizes a batch and runs inference, returning one pooled vector per text
    fn run_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let encodings: Vec<_> = texts
            .iter()
            .map(|text| {
                self.tokenizer
                    .encode(text.as_str(), true)
                    .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))
            })
            .collect::<Result<Vec<_>>>()?;

        let max_len = encodings
            .iter()
            .map(|enc| enc.get_ids().len())
            .max()
            .unwrap_or(0);

        // Pad every sequence to the longest in the batch
        let mut input_ids_batch = Vec::with_capacity(texts.len() * max_len);
        let mut attention_mask_batch = Vec::with_capacity(texts.len() * max_len);
        let mut token_type_ids_batch = Vec::with_capacity(texts.len() * max_len);

        for encoding in &encodings {
            let ids = encoding.get_ids();
            let mask = encoding.get_attention_mask();

            input_ids_batch.extend(ids.iter().map(|&id| id as i64));
            attention_mask_batch.extend(mask.iter().map(|&m| m as i64));
            token_type_ids_batch.extend(std::iter::repeat(0i64).take(ids.len()));

            let padding_needed = max_len - ids.len();
            input_ids_batch.extend(std::iter::repeat(0i64).take(padding_needed));
            attention_mask_batch.extend(std::iter::repeat(0i64).take(padding_needed));
            token_type_ids_batch.extend(std::iter::repeat(0i64).take(padding_needed));
        }

        // Mean pooling below needs the mask after the tensors consume it
        let attention_mask_for_pooling = attention_mask_batch.clone();

        let input_ids_array = Array2::from_shape_vec((texts.len(), max_len), input_ids_batch)
            .context("Failed to create batch input_ids array")?;
        let attention_mask_array =
            Array2::from_shape_vec((texts.len(), max_len), attention_mask_batch)
                .context("Failed to create batch attention_mask array")?;
        let token_type_ids_array =
            Array2::from_shape_vec((texts.len(), max_len), token_type_ids_batch)
                .context("Failed to create batch token_type_ids array")?;

        let mut session_guard = self
            .session
            .lock()
            .map_err(|_| anyhow::anyhow!("Embedding session lock poisoned"))?;
        let outputs = session_guard.run(ort::inputs![
            "input_ids" => Value::from_array(input_ids_array)?,
            "attention_mask" => Value::from_array(attention_mask_array)?,
            "token_type_ids" => Value::from_array(token_type_ids_array)?
        ])?;

        let output_array = outputs[0]
            .try_extract_array::<f32>()
            .context("Failed to extract output tensor")?;

        // Output is token-level: [batch, seq_len, hidden_dim]. Mean-pool each
        // item over the sequence dimension, weighted by the attention mask so
        // padding tokens do not contribute.
        let mut embeddings: Vec<Vec<f32>> = Vec::with_capacity(texts.len());

        for batch_idx in 0..texts.len() {
            let batch_item = output_array.index_axis(Axis(0), batch_idx);
            let seq_len = batch_item.shape()[0];
            let hidden_dim = batch_item.shape()[1];

            let mask_start = batch_idx * max_len;
            let item_mask = &attention_mask_for_pooling[mask_start..mask_start + max_len];

            let mut pooled = vec![0.0f32; hidden_dim];
            let mut sum_mask = 0.0f32;

            for i in 0..seq_len {
                let mask_value = item_mask[i] as f32;
                sum_mask += mask_value;
                for j in 0..hidden_dim {
                    pooled[j] += batch_item[[i, j]] * mask_value;
                }
            }

            for val in &mut pooled {
                *val /= sum_mask.max(1e-9);
            }

            if pooled.len() != self.dimension {
                anyhow::bail!(
                    "Unexpected embedding dimension at index {}: {} (expected {})",
                    batch_idx,
                    pooled.len(),
                    self.dimension
                );
            }

            embeddings.push(pooled);
        }

        Ok(embeddings)
    }
}

#[async_trait]
impl TextEmbedder for OnnxEmbeddingModel {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let texts = [text.to_string()];
        let mut embeddings = self.run_batch(&texts)?;
        embeddings
            .pop()
            .context("Model produced no embedding for input text")
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.run_batch(texts)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
