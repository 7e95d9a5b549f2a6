// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod artifacts;

pub use artifacts::{
    artifact_file_name, validate_filename, ArtifactKind, ArtifactStore, StorageError,
    StoredArtifact,
};
