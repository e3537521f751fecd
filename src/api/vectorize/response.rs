// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

/// Response body for POST /api/vectorize
///
/// ```json
/// {"embeddings": [[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizeResponse {
    /// One fixed-length vector per input sentence, input order preserved
    pub embeddings: Vec<Vec<f32>>,
}
