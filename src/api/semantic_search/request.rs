// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Output shaping mode for search results
///
/// The mode only affects response shaping; ranking is identical in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Replace each corpus id with the sentence text at that position
    Sentence,
    /// Return the raw corpus id alongside the score
    Number,
}

impl SearchMode {
    /// Parses a mode string; anything other than "sentence" or "number" is an
    /// error, never a silent fallback.
    pub fn parse(mode: &str) -> Result<Self, ApiError> {
        match mode {
            "sentence" => Ok(SearchMode::Sentence),
            "number" => Ok(SearchMode::Number),
            other => Err(ApiError::InvalidMode(other.to_string())),
        }
    }
}

/// Request body for POST /api/semantic_search
///
/// ```json
/// {
///   "corpus": ["Google Chrome", "Firefox", "Eggshells", "Garbage"],
///   "query": "Browser",
///   "num_results": 2,
///   "mode": "sentence"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticSearchRequest {
    /// Candidate sentences; position is the corpus id
    pub corpus: Vec<String>,

    /// Query to rank the corpus against
    pub query: String,

    /// Requested result count (default 1). Values above the corpus length
    /// are silently clamped; zero or negative yields an empty result list.
    #[serde(default = "default_num_results")]
    pub num_results: i64,

    /// Output mode: "sentence" or "number" (default "number")
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_num_results() -> i64 {
    1
}

fn default_mode() -> String {
    "number".to_string()
}

impl SemanticSearchRequest {
    /// Effective result count after clamping to the corpus length
    pub fn effective_num_results(&self) -> usize {
        if self.num_results <= 0 {
            0
        } else {
            (self.num_results as usize).min(self.corpus.len())
        }
    }
}
