// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

pub mod api;
pub mod config;
pub mod embeddings;
pub mod vector;

pub use api::{ApiError, ErrorResponse};
pub use config::ServerConfig;
pub use embeddings::{HashEmbedder, OnnxEmbeddingModel, TextEmbedder};
pub use vector::{cosine_similarity, rank, SearchHit};
