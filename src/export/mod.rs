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

//! # Data Export Module
//!
//! Renders a [`ZiDataset`](crate::dataset::ZiDataset) back to bytes.
//!
//! ## Supported Output Formats
//!
//! - **CSV**: Header row plus one row per record, nulls as empty fields
//! - **JSON**: Array of objects, pretty-printed on request
//! - **JSONL**: One object per line
//!
//! Temporal cells render as ISO 8601 text in every format.

pub mod writer;

pub use writer::{ZiDatasetWriter, ZiWriteStats};
