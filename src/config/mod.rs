// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Startup configuration
//!
//! Credentials and operational settings are read once from command-line
//! flags, falling back to environment variables (and a `.env` file loaded by
//! `main`). Validation happens before any socket is bound.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const STABILITY_API_KEY_VAR: &str = "STABILITY_API_KEY";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_STABILITY_URL: &str =
    "https://api.stability.ai/v2beta/stable-image/generate/core";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required credential {0}; set it in the environment or in .env")]
    MissingCredential(&'static str),

    #[error("invalid listen address '{0}'")]
    InvalidListenAddr(String),

    #[error("invalid URL for {name}: '{value}'")]
    InvalidUrl { name: &'static str, value: String },
}

/// Multimodal Studio server
#[derive(Parser, Debug, Clone)]
#[command(name = "multimodal-studio")]
#[command(version)]
#[command(about = "Text and image generation front end with downloadable artifacts", long_about = None)]
pub struct Cli {
    /// Gemini API key used for text generation
    #[arg(long, env = GEMINI_API_KEY_VAR, hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Stability AI API key used for image generation
    #[arg(long, env = STABILITY_API_KEY_VAR, hide_env_values = true)]
    pub stability_api_key: Option<String>,

    /// Address the HTTP server binds to
    #[arg(long, env = "LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    /// Directory generated artifacts are written to and served from
    #[arg(long, env = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Text generation model identifier
    #[arg(long, env = "TEXT_MODEL", default_value = DEFAULT_TEXT_MODEL)]
    pub text_model: String,

    /// Base URL of the Gemini API
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    /// Full URL of the Stability image generation endpoint
    #[arg(long, env = "STABILITY_URL", default_value = DEFAULT_STABILITY_URL)]
    pub stability_url: String,

    /// Timeout for upstream calls in seconds (no timeout when unset)
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

/// Validated configuration
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub gemini_api_key: String,
    pub stability_api_key: String,
    pub listen_addr: SocketAddr,
    pub output_dir: PathBuf,
    pub text_model: String,
    pub gemini_base_url: String,
    pub stability_url: String,
    pub upstream_timeout: Option<Duration>,
}

impl StudioConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let gemini_api_key = require_credential(cli.gemini_api_key, GEMINI_API_KEY_VAR)?;
        let stability_api_key = require_credential(cli.stability_api_key, STABILITY_API_KEY_VAR)?;

        let listen_addr = cli
            .listen_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidListenAddr(cli.listen_addr.clone()))?;

        check_url("gemini-base-url", &cli.gemini_base_url)?;
        check_url("stability-url", &cli.stability_url)?;

        Ok(Self {
            gemini_api_key,
            stability_api_key,
            listen_addr,
            output_dir: cli.output_dir,
            text_model: cli.text_model,
            gemini_base_url: cli.gemini_base_url.trim_end_matches('/').to_string(),
            stability_url: cli.stability_url,
            upstream_timeout: cli.upstream_timeout_secs.map(Duration::from_secs),
        })
    }
}

fn require_credential(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ConfigError::MissingCredential(name)),
    }
}

fn check_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        _ => Err(ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
        }),
    }
}
