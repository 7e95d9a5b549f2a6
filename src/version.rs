// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for Multimodal Studio

/// Semantic version number
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upstream services this build talks to
pub const UPSTREAMS: &[&str] = &["gemini-generate-content", "stability-stable-image-core"];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Multimodal Studio v{} ({})", VERSION, UPSTREAMS.join(", "))
}
