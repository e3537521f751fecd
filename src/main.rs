// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use anyhow::{Context, Result};
use embed_node::{api, config::ServerConfig, embeddings::OnnxEmbeddingModel};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    tracing::info!(
        model = %config.model_name,
        model_path = %config.model_path,
        "Loading embedding model"
    );

    // Fail fast: without a working model there is no partial-availability mode
    let model = OnnxEmbeddingModel::new(
        config.model_name.clone(),
        config.model_path.clone(),
        config.tokenizer_path.clone(),
    )
    .await
    .context("Failed to load embedding model, refusing to serve")?;

    api::start_server(&config, Arc::new(model)).await
}
