// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Stability AI client for text-to-image generation

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header::ACCEPT, multipart::Form, Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

use super::{GenerationError, ImageGenerator};

pub const ASPECT_RATIO: &str = "1:1";
pub const STYLE_PRESET: &str = "photographic";
pub const ACCEPT_JPEG: &str = "image/jpeg";

/// Client for the Stability `stable-image/generate` endpoints
pub struct StabilityClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl StabilityClient {
    pub fn new(endpoint: &str, api_key: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("Stability client configured: endpoint={}", endpoint);

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Generate a JPEG for the prompt. Anything other than 200 is a failure.
    pub async fn generate(&self, prompt: &str) -> Result<Bytes, GenerationError> {
        let form = Form::new()
            .text("prompt", prompt.to_string())
            .text("aspect_ratio", ASPECT_RATIO)
            .text("style_preset", STYLE_PRESET);

        debug!("Stability generate POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, ACCEPT_JPEG)
            .multipart(form)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::UpstreamStatus { status, body });
        }

        Ok(response.bytes().await?)
    }
}

#[async_trait]
impl ImageGenerator for StabilityClient {
    async fn generate_image(&self, prompt: &str) -> Result<Bytes, GenerationError> {
        self.generate(prompt).await
    }
}
