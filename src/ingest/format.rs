//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zieda.
//! The Zieda project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// File formats understood by the reader and writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiDataFormat {
    Csv,
    Json,
    Jsonl,
    Unknown,
}

impl ZiDataFormat {
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => ZiDataFormat::Csv,
            "json" => ZiDataFormat::Json,
            "jsonl" | "ndjson" => ZiDataFormat::Jsonl,
            _ => ZiDataFormat::Unknown,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ZiFormatDetector;

impl ZiFormatDetector {
    pub fn new() -> Self {
        ZiFormatDetector
    }

    /// Detects the format from the file extension.
    pub fn detect_from_path(&self, path: &Path) -> Result<ZiDataFormat> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                ZiError::validation(format!("path has no extension: {}", path.display()))
            })?;
        Ok(ZiDataFormat::from_extension(extension))
    }
}
