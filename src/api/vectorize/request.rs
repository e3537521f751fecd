// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

/// Request body for POST /api/vectorize
///
/// ```json
/// {"sentences": ["I am a sentence", "I am another sentence"]}
/// ```
///
/// An empty `sentences` array is valid and yields an empty embeddings array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizeRequest {
    /// Sentences to embed, in response order
    pub sentences: Vec<String>,
}
