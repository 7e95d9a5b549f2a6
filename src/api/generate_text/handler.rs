// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text generation endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, error, info};

use super::request::TextRequest;
use super::response::TextResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /text/generate - Generate text and save it as a `.txt` artifact
///
/// Any upstream or storage failure becomes a 500 carrying the error message.
pub async fn generate_text_handler(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    debug!(
        "Text generation request received: prompt_len={}",
        request.prompt.len()
    );

    let generated = state
        .text_generator
        .generate_text(&request.prompt)
        .await
        .map_err(|e| {
            error!(kind = e.kind(), "Error generating text: {}", e);
            ApiError::InternalError(e.to_string())
        })?;

    let text = generated.trim().to_string();

    let artifact = state.artifacts.save_text(&text).await.map_err(|e| {
        error!("Error saving generated text: {}", e);
        ApiError::InternalError(e.to_string())
    })?;

    info!(
        "Text generated: {} chars saved to {}",
        text.chars().count(),
        artifact.file_name
    );

    Ok(Json(TextResponse {
        response: text,
        file_path: artifact.download_path(),
    }))
}
