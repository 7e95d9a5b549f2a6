// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /text/generate

pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_text_handler;
pub use request::TextRequest;
pub use response::TextResponse;
