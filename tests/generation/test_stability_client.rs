// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! StabilityClient against a local stub upstream

use axum::http::StatusCode;
use multimodal_studio::generation::{GenerationError, ImageGenerator, StabilityClient};

use crate::support::{StubReply, StubUpstream, TEST_STABILITY_KEY, UNREACHABLE_URL};

const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x01, 0xFF, 0xD9];

fn client_for(endpoint: &str) -> StabilityClient {
    StabilityClient::new(endpoint, TEST_STABILITY_KEY, None).unwrap()
}

#[tokio::test]
async fn test_generate_returns_raw_bytes() {
    let stub = StubUpstream::start(StubReply::jpeg(JPEG)).await;
    let client = client_for(&stub.url("/v2beta/stable-image/generate/core"));
    let generator: &dyn ImageGenerator = &client;

    let bytes = generator.generate_image("a red fox").await.unwrap();
    assert_eq!(bytes.as_ref(), JPEG);
}

#[tokio::test]
async fn test_request_is_authorized_multipart_with_fixed_fields() {
    let stub = StubUpstream::start(StubReply::jpeg(JPEG)).await;
    client_for(&stub.url("/v2beta/stable-image/generate/core"))
        .generate("a red fox in the snow")
        .await
        .unwrap();

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.path, "/v2beta/stable-image/generate/core");
    assert_eq!(
        req.header("authorization").as_deref(),
        Some("Bearer test-stability-key")
    );
    assert_eq!(req.header("accept").as_deref(), Some("image/jpeg"));
    assert!(req
        .header("content-type")
        .unwrap()
        .starts_with("multipart/form-data"));

    let body = req.body_text();
    assert!(body.contains("name=\"prompt\""));
    assert!(body.contains("a red fox in the snow"));
    assert!(body.contains("name=\"aspect_ratio\""));
    assert!(body.contains("1:1"));
    assert!(body.contains("name=\"style_preset\""));
    assert!(body.contains("photographic"));
}

#[tokio::test]
async fn test_error_status_keeps_body_for_logging() {
    let stub = StubUpstream::start(StubReply::error(
        StatusCode::BAD_REQUEST,
        r#"{"name":"bad_request","errors":["prompt: cannot be blank"]}"#,
    ))
    .await;

    let err = client_for(&stub.base_url).generate("").await.unwrap_err();
    match err {
        GenerationError::UpstreamStatus { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("cannot be blank"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_success_other_than_200_is_still_a_failure() {
    let stub = StubUpstream::start(StubReply {
        status: StatusCode::ACCEPTED,
        content_type: "application/json",
        body: br#"{"id":"pending"}"#.to_vec(),
    })
    .await;

    let err = client_for(&stub.base_url).generate("a fox").await.unwrap_err();
    assert!(matches!(
        err,
        GenerationError::UpstreamStatus { status: 202, .. }
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let err = client_for(UNREACHABLE_URL).generate("a fox").await.unwrap_err();
    assert!(matches!(err, GenerationError::Network(_)));
}
