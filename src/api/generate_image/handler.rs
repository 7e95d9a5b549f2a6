// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, error, info};

use super::request::ImageRequest;
use super::response::ImageResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::generation::GenerationError;

/// POST /image/generate - Generate an image and save it as a `.jpg` artifact
///
/// A non-200 upstream status is logged with its body and reported to the
/// caller only as a generic failure. Network and storage errors relay their
/// message.
pub async fn generate_image_handler(
    State(state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> Result<Json<ImageResponse>, ApiError> {
    debug!(
        "Image generation request received: prompt_len={}",
        request.prompt.len()
    );

    let image = state
        .image_generator
        .generate_image(&request.prompt)
        .await
        .map_err(|e| match e {
            GenerationError::UpstreamStatus { status, ref body } => {
                error!(status, "Stability API error: {}", body);
                ApiError::ImageGenerationFailed
            }
            other => {
                error!(kind = other.kind(), "Error generating image: {}", other);
                ApiError::InternalError(other.to_string())
            }
        })?;

    let artifact = state.artifacts.save_image(&image).await.map_err(|e| {
        error!("Error saving generated image: {}", e);
        ApiError::InternalError(e.to_string())
    })?;

    info!(
        "Image generated: {} bytes saved to {}",
        image.len(),
        artifact.file_name
    );

    Ok(Json(ImageResponse {
        file_path: artifact.download_path(),
    }))
}
