// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Vector similarity and top-k ranking

mod similarity;

pub use similarity::{cosine_similarity, rank, SearchHit};
