// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod download;
pub mod errors;
pub mod generate_image;
pub mod generate_text;
pub mod home;
pub mod http_server;

pub use download::{download_image_handler, download_text_handler};
pub use errors::{ApiError, ErrorResponse};
pub use generate_image::{generate_image_handler, ImageRequest, ImageResponse};
pub use generate_text::{generate_text_handler, TextRequest, TextResponse};
pub use http_server::{create_app, start_server, AppState, HealthResponse};
