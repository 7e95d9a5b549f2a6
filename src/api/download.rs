// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! GET /download/text/{filename} and GET /download/image/{filename}

use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::Response,
};
use std::io::ErrorKind;
use tokio_util::io::ReaderStream;
use tracing::{debug, error, warn};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::storage::ArtifactKind;

pub async fn download_text_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    serve_artifact(&state, ArtifactKind::Text, &filename).await
}

pub async fn download_image_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    serve_artifact(&state, ArtifactKind::Image, &filename).await
}

async fn serve_artifact(
    state: &AppState,
    kind: ArtifactKind,
    filename: &str,
) -> Result<Response, ApiError> {
    let path = state
        .artifacts
        .locate(filename)
        .await
        .map_err(|e| {
            warn!("Rejected download of '{}': {}", filename.escape_debug(), e);
            ApiError::from(e)
        })?
        .ok_or(ApiError::NotFound)?;

    // The file can disappear between the existence check and the open
    let file = tokio::fs::File::open(&path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ApiError::NotFound
        } else {
            error!("Failed to open {}: {}", path.display(), e);
            ApiError::InternalError(e.to_string())
        }
    })?;

    debug!("Serving {} as {}", path.display(), kind.content_type());

    Response::builder()
        .header(header::CONTENT_TYPE, kind.content_type())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| ApiError::InternalError(e.to_string()))
}
