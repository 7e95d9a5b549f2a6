// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Artifact store backed by a single output directory
//!
//! Every generation writes one new file named
//! `<prefix>_<YYYYMMDD_HHMMSS>_<suffix>.<ext>`. The random suffix keeps
//! names unique when two generations land in the same second, and files are
//! opened with `create_new` so an existing artifact is never overwritten.
//! Lookups only accept bare filenames.

use chrono::{DateTime, Local};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

const MAX_FILENAME_LEN: usize = 255;
const SUFFIX_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("output directory I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid filename '{0}'")]
    InvalidFilename(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Text,
    Image,
}

impl ArtifactKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ArtifactKind::Text => "text_output",
            ArtifactKind::Image => "generated_image",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Text => "txt",
            ArtifactKind::Image => "jpg",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ArtifactKind::Text => "text/plain; charset=utf-8",
            ArtifactKind::Image => "image/jpeg",
        }
    }

    /// Route prefix the artifact is downloadable under
    pub fn download_base(&self) -> &'static str {
        match self {
            ArtifactKind::Text => "/download/text",
            ArtifactKind::Image => "/download/image",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoredArtifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub path: PathBuf,
}

impl StoredArtifact {
    pub fn download_path(&self) -> String {
        format!("{}/{}", self.kind.download_base(), self.file_name)
    }
}

pub fn artifact_file_name(kind: ArtifactKind, at: DateTime<Local>, suffix: &str) -> String {
    format!(
        "{}_{}_{}.{}",
        kind.prefix(),
        at.format("%Y%m%d_%H%M%S"),
        suffix,
        kind.extension()
    )
}

/// Accept only a bare filename: no separators, no traversal, no hidden files.
pub fn validate_filename(name: &str) -> Result<(), StorageError> {
    let invalid = name.is_empty()
        || name.len() > MAX_FILENAME_LEN
        || name.starts_with('.')
        || name
            .chars()
            .any(|c| c == '/' || c == '\\' || c == '"' || c.is_control());

    if invalid {
        return Err(StorageError::InvalidFilename(name.to_string()));
    }
    Ok(())
}

fn random_suffix() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(SUFFIX_LEN);
    id
}

pub struct ArtifactStore {
    output_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write UTF-8 text as a new `.txt` artifact
    pub async fn save_text(&self, text: &str) -> Result<StoredArtifact, StorageError> {
        self.save(ArtifactKind::Text, text.as_bytes()).await
    }

    /// Write encoded image bytes verbatim as a new `.jpg` artifact
    pub async fn save_image(&self, bytes: &[u8]) -> Result<StoredArtifact, StorageError> {
        self.save(ArtifactKind::Image, bytes).await
    }

    async fn save(&self, kind: ArtifactKind, contents: &[u8]) -> Result<StoredArtifact, StorageError> {
        fs::create_dir_all(&self.output_dir).await?;

        let file_name = artifact_file_name(kind, Local::now(), &random_suffix());
        let path = self.output_dir.join(&file_name);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(contents).await?;
        file.flush().await?;

        debug!("Wrote {} bytes to {}", contents.len(), path.display());

        Ok(StoredArtifact {
            kind,
            file_name,
            path,
        })
    }

    /// Resolve a bare filename to an existing regular file in the output directory
    pub async fn locate(&self, file_name: &str) -> Result<Option<PathBuf>, StorageError> {
        validate_filename(file_name)?;

        let path = self.output_dir.join(file_name);
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(Some(path)),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}
