// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared helpers: a recording stub upstream and app construction
#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use multimodal_studio::{
    api::AppState,
    generation::{GeminiClient, StabilityClient},
    storage::ArtifactStore,
};
use std::path::Path;
use std::sync::{Arc, Mutex};

pub const TEST_GEMINI_KEY: &str = "test-gemini-key";
pub const TEST_STABILITY_KEY: &str = "test-stability-key";
pub const TEST_MODEL: &str = "gemini-2.5-flash";

/// Base URL of a port nothing listens on
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl StubReply {
    pub fn gemini_text(text: &str) -> Self {
        let body = serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": text}], "role": "model"}, "finishReason": "STOP"}
            ]
        });
        Self {
            status: StatusCode::OK,
            content_type: "application/json",
            body: body.to_string().into_bytes(),
        }
    }

    pub fn jpeg(bytes: &[u8]) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "image/jpeg",
            body: bytes.to_vec(),
        }
    }

    pub fn error(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone)]
struct StubState {
    reply: Arc<StubReply>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Local HTTP server answering every request with a fixed reply
pub struct StubUpstream {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubUpstream {
    pub async fn start(reply: StubReply) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply: Arc::new(reply),
            captured: captured.clone(),
        };
        let app = Router::new().fallback(record_and_reply).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            captured,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

async fn record_and_reply(
    State(stub): State<StubState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    stub.captured.lock().unwrap().push(CapturedRequest {
        path: uri.path().to_string(),
        headers,
        body,
    });
    (
        stub.reply.status,
        [(header::CONTENT_TYPE, stub.reply.content_type)],
        stub.reply.body.clone(),
    )
        .into_response()
}

/// App state wired to real clients pointed at the given upstream URLs
pub fn state_for(gemini_base_url: &str, stability_url: &str, output_dir: &Path) -> AppState {
    let text = GeminiClient::new(gemini_base_url, TEST_MODEL, TEST_GEMINI_KEY, None).unwrap();
    let image = StabilityClient::new(stability_url, TEST_STABILITY_KEY, None).unwrap();
    AppState::new(
        Arc::new(text),
        Arc::new(image),
        Arc::new(ArtifactStore::new(output_dir)),
    )
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Number of entries in the output directory, zero if it was never created
pub fn artifact_count(output_dir: &Path) -> usize {
    std::fs::read_dir(output_dir)
        .map(|entries| entries.count())
        .unwrap_or(0)
}
