// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/semantic_search endpoint

mod handler;
mod request;
mod response;

pub use handler::semantic_search_handler;
pub use request::{SearchMode, SemanticSearchRequest};
pub use response::SearchResultEntry;
