// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::storage::StorageError;

pub const FILE_NOT_FOUND: &str = "File not found";
pub const INVALID_FILENAME: &str = "Invalid filename";
pub const IMAGE_GENERATION_FAILED: &str = "Image generation failed";

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    NotFound,
    InvalidFilename,
    /// Upstream image API answered with a non-200 status; details stay in the logs
    ImageGenerationFailed,
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            ApiError::NotFound => FILE_NOT_FOUND.to_string(),
            ApiError::InvalidFilename => INVALID_FILENAME.to_string(),
            ApiError::ImageGenerationFailed => IMAGE_GENERATION_FAILED.to_string(),
            ApiError::InternalError(msg) => msg.clone(),
        };
        ErrorResponse { error: message }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidFilename => StatusCode::BAD_REQUEST,
            ApiError::ImageGenerationFailed | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidFilename(_) => ApiError::InvalidFilename,
            StorageError::Io(e) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "Not found"),
            ApiError::InvalidFilename => write!(f, "Invalid filename"),
            ApiError::ImageGenerationFailed => write!(f, "Image generation failed"),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}
