// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextResponse {
    /// Trimmed generated text
    pub response: String,
    /// Relative download URL of the saved `.txt` artifact
    pub file_path: String,
}
