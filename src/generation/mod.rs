// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upstream generation clients
//!
//! Handlers only see the [`TextGenerator`] and [`ImageGenerator`] traits;
//! the concrete Gemini and Stability clients are built once at startup and
//! injected through application state.

pub mod errors;
pub mod image_client;
pub mod text_client;

use async_trait::async_trait;
use bytes::Bytes;

pub use errors::GenerationError;
pub use image_client::StabilityClient;
pub use text_client::GeminiClient;

/// Produces text for a prompt
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the untrimmed generated text
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Produces encoded image bytes for a prompt
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<Bytes, GenerationError>;
}
