// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use super::download::{download_image_handler, download_text_handler};
use super::generate_image::generate_image_handler;
use super::generate_text::generate_text_handler;
use super::home::{app_js_handler, home_handler};
use crate::config::StudioConfig;
use crate::generation::{GeminiClient, ImageGenerator, StabilityClient, TextGenerator};
use crate::storage::ArtifactStore;
use crate::version;

/// Shared handler dependencies, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub text_generator: Arc<dyn TextGenerator>,
    pub image_generator: Arc<dyn ImageGenerator>,
    pub artifacts: Arc<ArtifactStore>,
}

impl AppState {
    pub fn new(
        text_generator: Arc<dyn TextGenerator>,
        image_generator: Arc<dyn ImageGenerator>,
        artifacts: Arc<ArtifactStore>,
    ) -> Self {
        Self {
            text_generator,
            image_generator,
            artifacts,
        }
    }

    /// Build the Gemini and Stability clients from validated configuration
    pub fn from_config(config: &StudioConfig) -> Result<Self> {
        let text = GeminiClient::new(
            &config.gemini_base_url,
            &config.text_model,
            &config.gemini_api_key,
            config.upstream_timeout,
        )?;
        let image = StabilityClient::new(
            &config.stability_url,
            &config.stability_api_key,
            config.upstream_timeout,
        )?;

        Ok(Self::new(
            Arc::new(text),
            Arc::new(image),
            Arc::new(ArtifactStore::new(&config.output_dir)),
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn create_app(state: AppState) -> Router {
    let output_files = ServeDir::new(state.artifacts.output_dir());

    Router::new()
        .route("/", get(home_handler))
        .route("/static/js/app.js", get(app_js_handler))
        .route("/health", get(health_handler))
        .route("/text/generate", post(generate_text_handler))
        .route("/download/text/:filename", get(download_text_handler))
        .route("/image/generate", post(generate_image_handler))
        .route("/download/image/:filename", get(download_image_handler))
        .nest_service("/output", output_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: version::VERSION.to_string(),
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
