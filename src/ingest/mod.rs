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

//! # Data Ingestion Module
//!
//! Loads external files into a [`ZiDataset`](crate::dataset::ZiDataset).
//!
//! ## Module Components
//!
//! - **Format Detection** ([format.rs](format/index.html)): Format detection from file extensions
//! - **Reader** ([reader.rs](reader/index.html)): CSV, JSON and JSONL dataset loading
//!
//! ## Supported Input Formats
//!
//! - **CSV**: Comma-separated values, every cell loaded as text or null
//! - **JSON**: Array of flat objects, columns typed from the JSON values
//! - **JSONL**: One flat object per line, typed like JSON
//!
//! ## Usage Patterns
//!
//! ```rust
//! use std::path::Path;
//!
//! use zieda::ingest::{ZiDatasetReader, ZiReaderConfig};
//! use zieda::ZiDataset;
//!
//! fn load(path: &Path) -> zieda::Result<ZiDataset> {
//!     let reader = ZiDatasetReader::new().with_config(ZiReaderConfig {
//!         delimiter: b';',
//!         ..Default::default()
//!     });
//!     reader.read_path(path)
//! }
//! ```

pub mod format;
pub mod reader;

pub use format::{ZiDataFormat, ZiFormatDetector};
pub use reader::{ZiDatasetReader, ZiReaderConfig};
