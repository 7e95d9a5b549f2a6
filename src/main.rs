// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use multimodal_studio::{api::AppState, config::Cli, start_server, version, StudioConfig};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may live in a local .env file
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = match StudioConfig::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    info!("{}", version::get_version_string());
    info!(
        "Writing artifacts to {}, text model {}",
        config.output_dir.display(),
        config.text_model
    );

    let state = AppState::from_config(&config)?;
    start_server(config.listen_addr, state).await
}
