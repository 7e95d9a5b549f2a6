// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Network(_) => "network",
            GenerationError::UpstreamStatus { .. } => "upstream_status",
            GenerationError::InvalidResponse(_) => "invalid_response",
        }
    }
}
