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

//! # Zieda Core Library
//!
//! Data preparation for tabular datasets: column type inference and class
//! imbalance analysis.
//!
//! ## Module Overview
//!
//! - **value**: Typed cell values, declared column types, per-value parsers
//! - **dataset**: Columns and datasets with their structural invariants
//! - **inference**: Upgrades textual columns to temporal or numeric
//! - **imbalance**: Frequency distribution and domination flag of a column
//! - **ingest**: CSV, JSON and JSONL dataset loading
//! - **export**: CSV, JSON and JSONL dataset writing
//! - **eda**: Configured sequential run of inference and analysis
//!
//! ## Feature Flags
//!
//! - `csv`: Enables CSV loading and writing
//! - `full`: Enables all features
//!
//! ## Quick Start
//!
//! ```rust
//! use zieda::{infer_types, analyze_imbalance, ZiColumn, ZiDataset};
//!
//! fn main() -> zieda::Result<()> {
//!     let dataset = ZiDataset::new(vec![
//!         ZiColumn::textual("quantity", ["1", "2", "3"]),
//!         ZiColumn::textual("status", ["active", "active", "inactive"]),
//!     ])?;
//!
//!     let (cleaned, temporal, numeric) = infer_types(&dataset)?.into_parts();
//!     assert!(temporal.is_empty());
//!     assert_eq!(numeric, vec!["quantity".to_string()]);
//!
//!     let outcome = analyze_imbalance(&cleaned, "status")?;
//!     assert!(outcome.report().is_some_and(|r| !r.is_imbalanced));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, ZiError>`. A malformed dataset is
//! `InvalidInput`, an absent target column is `ColumnNotFound`. Columns that
//! resist conversion and all-null target columns are ordinary results.
//!
//! Both core operations are pure. They never mutate their input and hold no
//! state between calls, so independent or shared datasets may be processed
//! from any number of threads.

pub mod errors;
pub mod value;
pub mod dataset;
pub mod inference;
pub mod imbalance;
pub mod ingest;
pub mod export;
pub mod eda;

pub use errors::{Result, ZiError};
pub use value::{parse_numeric, ZiClassKey, ZiParseError, ZiTemporalFormat, ZiValue, ZiValueType};
pub use dataset::{ZiColumn, ZiDataset};
pub use inference::{infer_types, ZiInferenceResult, ZiTypeInference};
pub use imbalance::{
    analyze_imbalance, ZiImbalanceAnalyzer, ZiImbalanceOutcome, ZiImbalanceReport,
    ZiNoDataReason, ZiNoDataResult, ZIEDA_IMBALANCE_THRESHOLD,
};
pub use ingest::{ZiDataFormat, ZiDatasetReader, ZiFormatDetector, ZiReaderConfig};
pub use export::{ZiDatasetWriter, ZiWriteStats};
pub use eda::{
    ZiCleaningSummary, ZiEdaConfig, ZiEdaConfigBuilder, ZiEdaOutput, ZiEdaReport, ZiEdaRunner,
    ZiStageResult,
};
