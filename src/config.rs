// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Process configuration loaded from environment variables

use std::env;
use std::net::SocketAddr;

/// Configuration for the HTTP node
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    pub host: String,
    /// Port to bind the HTTP listener to
    pub port: u16,
    /// Embedding model name
    pub model_name: String,
    /// Path to the ONNX model file
    pub model_path: String,
    /// Path to the tokenizer JSON file
    pub tokenizer_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            model_name: "all-MiniLM-L6-v2".to_string(),
            model_path: "./models/all-MiniLM-L6-v2-onnx/model.onnx".to_string(),
            tokenizer_path: "./models/all-MiniLM-L6-v2-onnx/tokenizer.json".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// - `HOST`: bind address (default `127.0.0.1`)
    /// - `PORT`: bind port (default `8000`)
    /// - `EMBED_MODEL_NAME`: model identifier (default `all-MiniLM-L6-v2`)
    /// - `EMBED_MODEL_PATH`: ONNX model file path
    /// - `EMBED_TOKENIZER_PATH`: tokenizer JSON file path
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            model_name: env::var("EMBED_MODEL_NAME").unwrap_or(defaults.model_name),
            model_path: env::var("EMBED_MODEL_PATH").unwrap_or(defaults.model_path),
            tokenizer_path: env::var("EMBED_TOKENIZER_PATH").unwrap_or(defaults.tokenizer_path),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("Port must be greater than 0".to_string());
        }
        if self.model_path.trim().is_empty() {
            return Err("Model path cannot be empty".to_string());
        }
        if self.tokenizer_path.trim().is_empty() {
            return Err("Tokenizer path cannot be empty".to_string());
        }
        Ok(())
    }

    /// Socket address to bind to
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
