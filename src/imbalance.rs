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

//! # Zieda Imbalance Module
//!
//! Frequency distribution of a target column and a single-class domination
//! flag.
//!
//! Null cells are dropped before counting. The dominant class is the value
//! with the highest count; among tied values the one appearing first in row
//! order wins. A column is imbalanced when the dominant proportion is strictly
//! greater than [`ZIEDA_IMBALANCE_THRESHOLD`].

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::dataset::ZiDataset;
use crate::errors::{Result, ZiError};
use crate::value::ZiClassKey;

/// Dominant proportion above which a column is flagged imbalanced.
pub const ZIEDA_IMBALANCE_THRESHOLD: f64 = 0.8;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZiImbalanceReport {
    pub column: String,
    /// Number of non-null cells.
    pub total: usize,
    pub counts: BTreeMap<ZiClassKey, usize>,
    pub ratios: BTreeMap<ZiClassKey, f64>,
    pub max_ratio: f64,
    pub dominant_class: ZiClassKey,
    /// Least frequent value, ties broken by first appearance.
    pub minority_class: ZiClassKey,
    /// Dominant count divided by minority count.
    pub imbalance_ratio: f64,
    pub is_imbalanced: bool,
}

impl ZiImbalanceReport {
    pub fn class_count(&self) -> usize {
        self.counts.len()
    }

    pub fn count_of(&self, key: &ZiClassKey) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn ratio_of(&self, key: &ZiClassKey) -> f64 {
        self.ratios.get(key).copied().unwrap_or(0.0)
    }
}

/// Why a column produced no distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiNoDataReason {
    /// The dataset has no rows.
    EmptyColumn,
    /// Every cell in the column is null.
    AllNull,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ZiNoDataResult {
    pub column: String,
    pub reason: ZiNoDataReason,
}

/// Either a distribution report or the empty-distribution state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ZiImbalanceOutcome {
    Report(ZiImbalanceReport),
    NoData(ZiNoDataResult),
}

impl ZiImbalanceOutcome {
    pub fn report(&self) -> Option<&ZiImbalanceReport> {
        match self {
            ZiImbalanceOutcome::Report(report) => Some(report),
            ZiImbalanceOutcome::NoData(_) => None,
        }
    }

    pub fn into_report(self) -> Option<ZiImbalanceReport> {
        match self {
            ZiImbalanceOutcome::Report(report) => Some(report),
            ZiImbalanceOutcome::NoData(_) => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, ZiImbalanceOutcome::NoData(_))
    }
}

/// Stateless imbalance analyzer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiImbalanceAnalyzer;

impl ZiImbalanceAnalyzer {
    pub fn new() -> Self {
        ZiImbalanceAnalyzer
    }

    /// Computes the distribution of `target_column`.
    ///
    /// Fails with `ColumnNotFound` before any counting when the column is
    /// absent. An all-null or zero-row column yields `NoData`.
    pub fn analyze(&self, dataset: &ZiDataset, target_column: &str) -> Result<ZiImbalanceOutcome> {
        let column = dataset
            .column(target_column)
            .ok_or_else(|| ZiError::column_not_found(target_column))?;

        // key -> (first row, count)
        let mut tally: HashMap<ZiClassKey, (usize, usize)> = HashMap::new();
        for (row, value) in column.values.iter().enumerate() {
            if let Some(key) = value.class_key() {
                tally
                    .entry(key)
                    .and_modify(|entry| entry.1 += 1)
                    .or_insert((row, 1));
            }
        }

        let total: usize = tally.values().map(|(_, count)| count).sum();
        if total == 0 {
            let reason = if column.is_empty() {
                ZiNoDataReason::EmptyColumn
            } else {
                ZiNoDataReason::AllNull
            };
            log::debug!("column '{}' has no non-null values", target_column);
            return Ok(ZiImbalanceOutcome::NoData(ZiNoDataResult {
                column: target_column.to_string(),
                reason,
            }));
        }

        let (dominant_class, dominant_count) = tally
            .iter()
            .max_by(|(_, (row_a, count_a)), (_, (row_b, count_b))| {
                count_a.cmp(count_b).then(row_b.cmp(row_a))
            })
            .map(|(key, (_, count))| (key.clone(), *count))
            .ok_or_else(|| ZiError::internal("non-empty tally has no maximum"))?;

        let (minority_class, minority_count) = tally
            .iter()
            .min_by(|(_, (row_a, count_a)), (_, (row_b, count_b))| {
                count_a.cmp(count_b).then(row_a.cmp(row_b))
            })
            .map(|(key, (_, count))| (key.clone(), *count))
            .ok_or_else(|| ZiError::internal("non-empty tally has no minimum"))?;

        let counts: BTreeMap<ZiClassKey, usize> = tally
            .into_iter()
            .map(|(key, (_, count))| (key, count))
            .collect();
        let ratios: BTreeMap<ZiClassKey, f64> = counts
            .iter()
            .map(|(key, count)| (key.clone(), *count as f64 / total as f64))
            .collect();

        let max_ratio = dominant_count as f64 / total as f64;
        let is_imbalanced = max_ratio > ZIEDA_IMBALANCE_THRESHOLD;

        log::debug!(
            "column '{}': {} classes over {} values, dominant '{}' at {:.4}",
            target_column,
            counts.len(),
            total,
            dominant_class,
            max_ratio
        );

        Ok(ZiImbalanceOutcome::Report(ZiImbalanceReport {
            column: target_column.to_string(),
            total,
            counts,
            ratios,
            max_ratio,
            dominant_class,
            minority_class,
            imbalance_ratio: dominant_count as f64 / minority_count as f64,
            is_imbalanced,
        }))
    }
}

/// Shorthand for `ZiImbalanceAnalyzer::new().analyze(dataset, target_column)`.
pub fn analyze_imbalance(dataset: &ZiDataset, target_column: &str) -> Result<ZiImbalanceOutcome> {
    ZiImbalanceAnalyzer::new().analyze(dataset, target_column)
}
