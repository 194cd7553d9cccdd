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

//! # Zieda EDA Module
//!
//! Sequential composition of type inference and imbalance analysis, as a
//! service layer would drive them.
//!
//! ## Stages
//!
//! 1. **Cleaning**: type inference, unless disabled in [`ZiEdaConfig`]
//! 2. **Imbalance**: analysis of the configured target column on the cleaned
//!    dataset, skipped when no target is configured
//!
//! A malformed dataset aborts the run with `InvalidInput`. Any other stage
//! failure, such as a missing target column, is recorded as
//! [`ZiStageResult::Failed`] in the report and the run still succeeds.
//!
//! ## Configuration
//!
//! ```rust
//! use zieda::eda::{ZiEdaConfigBuilder, ZiEdaRunner};
//! use zieda::ZiDataset;
//!
//! fn report(dataset: &ZiDataset) -> zieda::Result<String> {
//!     let config = ZiEdaConfigBuilder::from_yaml("target_column: status\n")?;
//!     let output = ZiEdaRunner::new(config).run(dataset)?;
//!     Ok(serde_json::to_string_pretty(&output.report)?)
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dataset::ZiDataset;
use crate::errors::{Result, ZiError};
use crate::imbalance::{ZiImbalanceAnalyzer, ZiImbalanceOutcome};
use crate::inference::ZiTypeInference;
use crate::ingest::ZiDatasetReader;
use crate::value::ZiValueType;

/// Settings for one EDA run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiEdaConfig {
    /// Run type inference before analysis.
    pub infer_types: bool,
    /// Column to analyse for imbalance, if any.
    pub target_column: Option<String>,
}

impl Default for ZiEdaConfig {
    fn default() -> Self {
        ZiEdaConfig {
            infer_types: true,
            target_column: None,
        }
    }
}

impl ZiEdaConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(target) = &self.target_column {
            if target.trim().is_empty() {
                return Err(ZiError::validation("target_column must not be empty"));
            }
        }
        Ok(())
    }
}

/// Partial configuration; unset fields fall back to [`ZiEdaConfig::default`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZiEdaConfigBuilder {
    pub infer_types: Option<bool>,
    pub target_column: Option<String>,
}

impl ZiEdaConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infer_types(mut self, infer_types: bool) -> Self {
        self.infer_types = Some(infer_types);
        self
    }

    pub fn target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = Some(column.into());
        self
    }

    pub fn build(self) -> Result<ZiEdaConfig> {
        let base = ZiEdaConfig::default();
        let config = ZiEdaConfig {
            infer_types: self.infer_types.unwrap_or(base.infer_types),
            target_column: self.target_column.or(base.target_column),
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from a JSON object. `null` yields the defaults.
    pub fn from_json(value: &Value) -> Result<ZiEdaConfig> {
        if value.is_null() {
            return ZiEdaConfigBuilder::new().build();
        }
        let builder: ZiEdaConfigBuilder = serde_json::from_value(value.clone())
            .map_err(|e| ZiError::validation(format!("invalid eda config: {e}")))?;
        builder.build()
    }

    /// Builds a config from YAML text. Empty text yields the defaults.
    pub fn from_yaml(text: &str) -> Result<ZiEdaConfig> {
        if text.trim().is_empty() {
            return ZiEdaConfigBuilder::new().build();
        }
        let builder: ZiEdaConfigBuilder = serde_yaml::from_str(text)
            .map_err(|e| ZiError::validation(format!("invalid eda config: {e}")))?;
        builder.build()
    }
}

/// Status of one stage of a run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum ZiStageResult<T> {
    Success(T),
    Skipped,
    Failed(ZiError),
}

impl<T> ZiStageResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ZiStageResult::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ZiStageResult::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ZiError> {
        match self {
            ZiStageResult::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T>> for ZiStageResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => ZiStageResult::Success(value),
            Err(err) => ZiStageResult::Failed(err),
        }
    }
}

/// What the cleaning stage changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ZiCleaningSummary {
    pub temporal_columns: Vec<String>,
    pub numeric_columns: Vec<String>,
    /// Declared types after cleaning, in column order.
    pub schema: Vec<(String, ZiValueType)>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZiEdaReport {
    pub row_count: usize,
    pub column_count: usize,
    pub cleaning: ZiStageResult<ZiCleaningSummary>,
    pub imbalance: ZiStageResult<ZiImbalanceOutcome>,
}

/// Cleaned dataset plus the run report.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiEdaOutput {
    pub dataset: ZiDataset,
    pub report: ZiEdaReport,
}

/// Drives inference and analysis for one dataset at a time.
#[derive(Clone, Debug, Default)]
pub struct ZiEdaRunner {
    config: ZiEdaConfig,
    reader: ZiDatasetReader,
    inference: ZiTypeInference,
    analyzer: ZiImbalanceAnalyzer,
}

impl ZiEdaRunner {
    pub fn new(config: ZiEdaConfig) -> Self {
        ZiEdaRunner {
            config,
            ..Default::default()
        }
    }

    pub fn with_reader(mut self, reader: ZiDatasetReader) -> Self {
        self.reader = reader;
        self
    }

    pub fn config(&self) -> &ZiEdaConfig {
        &self.config
    }

    /// Loads `path` through the configured reader, then runs.
    pub fn run_path(&self, path: &Path) -> Result<ZiEdaOutput> {
        let dataset = self.reader.read_path(path)?;
        self.run(&dataset)
    }

    pub fn run(&self, dataset: &ZiDataset) -> Result<ZiEdaOutput> {
        self.config.validate()?;
        dataset.validate()?;

        let (cleaned, cleaning) = if self.config.infer_types {
            match self.inference.infer(dataset) {
                Ok(result) => {
                    let summary = ZiCleaningSummary {
                        temporal_columns: result.temporal_columns,
                        numeric_columns: result.numeric_columns,
                        schema: result.dataset.schema(),
                    };
                    (result.dataset, ZiStageResult::Success(summary))
                }
                Err(err) => {
                    log::warn!("cleaning stage failed: {}", err);
                    (dataset.clone(), ZiStageResult::Failed(err))
                }
            }
        } else {
            (dataset.clone(), ZiStageResult::Skipped)
        };

        let imbalance = match &self.config.target_column {
            Some(target) => {
                let outcome = self.analyzer.analyze(&cleaned, target);
                if let Err(err) = &outcome {
                    log::warn!("imbalance stage failed: {}", err);
                }
                ZiStageResult::from(outcome)
            }
            None => ZiStageResult::Skipped,
        };

        log::info!(
            "eda run over {} rows x {} columns finished",
            cleaned.row_count(),
            cleaned.column_count()
        );

        Ok(ZiEdaOutput {
            report: ZiEdaReport {
                row_count: cleaned.row_count(),
                column_count: cleaned.column_count(),
                cleaning,
                imbalance,
            },
            dataset: cleaned,
        })
    }
}
