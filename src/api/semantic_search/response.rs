// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use serde::{Deserialize, Serialize};

use super::SearchMode;
use crate::vector::SearchHit;

/// One entry in the semantic search response, shaped by the request mode
///
/// ```json
/// {"score": 0.75, "sentence": "Firefox"}
/// {"score": 0.75, "number": 1}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResultEntry {
    Sentence { score: f32, sentence: String },
    Number { score: f32, number: usize },
}

impl SearchResultEntry {
    /// Shapes ranked hits into response entries for the given mode
    ///
    /// Every `corpus_id` in `hits` must index into `corpus`; the ranker
    /// guarantees this for hits produced from the same request.
    pub fn shape(hits: &[SearchHit], corpus: &[String], mode: SearchMode) -> Vec<Self> {
        hits.iter()
            .map(|hit| match mode {
                SearchMode::Sentence => SearchResultEntry::Sentence {
                    score: hit.score,
                    sentence: corpus[hit.corpus_id].clone(),
                },
                SearchMode::Number => SearchResultEntry::Number {
                    score: hit.score,
                    number: hit.corpus_id,
                },
            })
            .collect()
    }

    pub fn score(&self) -> f32 {
        match self {
            SearchResultEntry::Sentence { score, .. } => *score,
            SearchResultEntry::Number { score, .. } => *score,
        }
    }
}
