// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

pub mod errors;
pub mod http_server;
pub mod semantic_search;
pub mod vectorize;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{create_app, start_server, AppState};
pub use semantic_search::{
    semantic_search_handler, SearchMode, SearchResultEntry, SemanticSearchRequest,
};
pub use vectorize::{vectorize_handler, VectorizeRequest, VectorizeResponse};
