// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/vectorize endpoint

mod handler;
mod request;
mod response;

pub use handler::vectorize_handler;
pub use request::VectorizeRequest;
pub use response::VectorizeResponse;
