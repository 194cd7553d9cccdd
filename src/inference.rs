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

//! # Zieda Type Inference Module
//!
//! Upgrades textual columns to temporal or numeric columns when every non-null
//! value admits the conversion.
//!
//! ## Conversion Order
//!
//! For each textual column, in column order:
//!
//! 1. **Temporal**: the layout is detected from the first non-null value and
//!    every other non-null value must parse under that same layout
//! 2. **Numeric**: tried only when the temporal attempt failed; every non-null
//!    value must be a finite decimal literal
//! 3. Otherwise the column is left exactly as supplied
//!
//! Columns already numeric, temporal or boolean are not inspected. There are
//! no options: layouts, locales and target types are fixed.
//!
//! The input dataset is never mutated. The result carries a new dataset plus
//! the names of the converted columns.

use serde::Serialize;

use crate::dataset::ZiDataset;
use crate::errors::Result;
use crate::value::{parse_numeric, ZiParseError, ZiTemporalFormat, ZiValue, ZiValueType};

/// Outcome of one inference run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZiInferenceResult {
    /// Copy of the input with converted columns retyped.
    pub dataset: ZiDataset,
    /// Columns converted to temporal, in column order.
    pub temporal_columns: Vec<String>,
    /// Columns converted to numeric, in column order.
    pub numeric_columns: Vec<String>,
}

impl ZiInferenceResult {
    /// Splits the result into `(cleaned, temporal_columns, numeric_columns)`.
    pub fn into_parts(self) -> (ZiDataset, Vec<String>, Vec<String>) {
        (self.dataset, self.temporal_columns, self.numeric_columns)
    }

    pub fn converted_count(&self) -> usize {
        self.temporal_columns.len() + self.numeric_columns.len()
    }
}

/// Stateless type inference engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiTypeInference;

impl ZiTypeInference {
    pub fn new() -> Self {
        ZiTypeInference
    }

    /// Infers temporal and numeric columns.
    ///
    /// Fails with `InvalidInput` only when the dataset breaks its structural
    /// invariants. A column that converts to neither type is not an error.
    pub fn infer(&self, dataset: &ZiDataset) -> Result<ZiInferenceResult> {
        dataset.validate()?;

        let mut cleaned = dataset.clone();
        let mut temporal_columns = Vec::new();
        let mut numeric_columns = Vec::new();

        for column in cleaned.columns_mut() {
            if column.value_type != ZiValueType::Textual {
                continue;
            }

            match convert_temporal(&column.values) {
                Ok(values) => {
                    log::debug!("column '{}' converted to temporal", column.name);
                    column.values = values;
                    column.value_type = ZiValueType::Temporal;
                    temporal_columns.push(column.name.clone());
                    continue;
                }
                Err(err) => {
                    log::debug!("column '{}' stays non-temporal: {}", column.name, err);
                }
            }

            match convert_numeric(&column.values) {
                Ok(values) => {
                    log::debug!("column '{}' converted to numeric", column.name);
                    column.values = values;
                    column.value_type = ZiValueType::Numeric;
                    numeric_columns.push(column.name.clone());
                }
                Err(err) => {
                    log::debug!("column '{}' stays textual: {}", column.name, err);
                }
            }
        }

        log::info!(
            "type inference over {} columns: {} temporal, {} numeric",
            dataset.column_count(),
            temporal_columns.len(),
            numeric_columns.len()
        );

        Ok(ZiInferenceResult {
            dataset: cleaned,
            temporal_columns,
            numeric_columns,
        })
    }
}

/// Shorthand for `ZiTypeInference::new().infer(dataset)`.
pub fn infer_types(dataset: &ZiDataset) -> Result<ZiInferenceResult> {
    ZiTypeInference::new().infer(dataset)
}

// Cells of a validated textual column are `Text` or null.
fn convert_temporal(values: &[ZiValue]) -> std::result::Result<Vec<ZiValue>, ZiParseError> {
    let mut layout: Option<ZiTemporalFormat> = None;

    values
        .iter()
        .map(|value| {
            let Some(literal) = value.as_text() else {
                return Ok(ZiValue::Null);
            };
            let format = match layout {
                Some(format) => format,
                None => {
                    let format = ZiTemporalFormat::detect(literal).ok_or_else(|| {
                        ZiParseError::NotTemporal {
                            literal: literal.to_string(),
                        }
                    })?;
                    layout = Some(format);
                    format
                }
            };
            format.parse(literal).map(ZiValue::Temporal)
        })
        .collect()
}

fn convert_numeric(values: &[ZiValue]) -> std::result::Result<Vec<ZiValue>, ZiParseError> {
    let parsed = values
        .iter()
        .map(|value| match value.as_text() {
            Some(literal) => parse_numeric(literal),
            None => Ok(ZiValue::Null),
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if !parsed.iter().any(|v| matches!(v, ZiValue::Float(_))) {
        return Ok(parsed);
    }

    // One float widens the whole column.
    Ok(parsed
        .into_iter()
        .map(|value| match value {
            ZiValue::Integer(i) => ZiValue::Float(i as f64),
            other => other,
        })
        .collect())
}
