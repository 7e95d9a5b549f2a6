// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod generation;
pub mod storage;
pub mod version;

pub use api::{create_app, start_server, AppState};
pub use config::{Cli, ConfigError, StudioConfig};
pub use generation::{GenerationError, ImageGenerator, TextGenerator};
pub use storage::{ArtifactKind, ArtifactStore, StorageError};
