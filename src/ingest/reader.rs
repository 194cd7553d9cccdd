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

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dataset::{ZiColumn, ZiDataset};
use crate::errors::{Result, ZiError};
use crate::ingest::format::{ZiDataFormat, ZiFormatDetector};
use crate::value::{ZiValue, ZiValueType};

/// Loader settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiReaderConfig {
    /// Field delimiter for CSV input.
    pub delimiter: u8,
    /// Whether the first CSV row names the columns.
    pub has_headers: bool,
    /// CSV fields that load as null.
    pub null_values: Vec<String>,
    /// Skip malformed rows instead of failing.
    pub skip_errors: bool,
    /// Upper bound on skipped rows before the load fails anyway.
    pub max_errors: usize,
}

impl Default for ZiReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            null_values: ["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skip_errors: false,
            max_errors: 100,
        }
    }
}

/// Reads CSV, JSON and JSONL input into a validated dataset.
#[derive(Clone, Debug, Default)]
pub struct ZiDatasetReader {
    config: ZiReaderConfig,
    detector: ZiFormatDetector,
}

impl ZiDatasetReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ZiReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ZiReaderConfig {
        &self.config
    }

    /// Loads a file, choosing the parser from its extension.
    pub fn read_path(&self, path: &Path) -> Result<ZiDataset> {
        let format = self.detector.detect_from_path(path)?;
        let file = File::open(path)?;
        log::debug!("reading {:?} dataset from {}", format, path.display());

        match format {
            ZiDataFormat::Csv => self.read_csv_or_reject(BufReader::new(file)),
            ZiDataFormat::Json => self.read_json(BufReader::new(file)),
            ZiDataFormat::Jsonl => self.read_jsonl(BufReader::new(file)),
            ZiDataFormat::Unknown => Err(ZiError::validation(format!(
                "unknown file format: {}",
                path.display()
            ))),
        }
    }

    #[cfg(feature = "csv")]
    fn read_csv_or_reject<R: Read>(&self, reader: R) -> Result<ZiDataset> {
        self.read_csv(reader)
    }

    #[cfg(not(feature = "csv"))]
    fn read_csv_or_reject<R: Read>(&self, _reader: R) -> Result<ZiDataset> {
        Err(ZiError::validation("csv support is not enabled"))
    }

    /// Reads CSV input. Every cell loads as `Text` unless it is a null marker.
    #[cfg(feature = "csv")]
    pub fn read_csv<R: Read>(&self, reader: R) -> Result<ZiDataset> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(self.config.has_headers)
            .from_reader(reader);

        let mut names: Vec<String> = if self.config.has_headers {
            csv_reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };
        let mut cells: Vec<Vec<ZiValue>> = vec![Vec::new(); names.len()];
        let mut error_count = 0;

        for (idx, result) in csv_reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    error_count += 1;
                    self.tolerate_error(error_count, idx, &e.to_string())?;
                    continue;
                }
            };

            if names.is_empty() {
                names = (0..record.len()).map(|i| format!("column_{i}")).collect();
                cells = vec![Vec::new(); names.len()];
            }
            for (column, field) in cells.iter_mut().zip(record.iter()) {
                column.push(self.csv_cell(field));
            }
        }

        ZiDataset::new(
            names
                .into_iter()
                .zip(cells)
                .map(|(name, values)| ZiColumn::new(name, ZiValueType::Textual, values))
                .collect(),
        )
    }

    #[cfg(feature = "csv")]
    fn csv_cell(&self, field: &str) -> ZiValue {
        if self.config.null_values.iter().any(|marker| marker == field) {
            ZiValue::Null
        } else {
            ZiValue::Text(field.to_string())
        }
    }

    /// Reads a JSON array of flat objects.
    pub fn read_json<R: Read>(&self, reader: R) -> Result<ZiDataset> {
        let value: Value = serde_json::from_reader(reader)?;
        let rows = match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| match item {
                    Value::Object(map) => Ok(map),
                    _ => Err(ZiError::validation(format!(
                        "JSON element {idx} is not an object"
                    ))),
                })
                .collect::<Result<Vec<_>>>()?,
            _ => return Err(ZiError::validation("JSON input must be an array of objects")),
        };
        dataset_from_objects(rows)
    }

    /// Reads one flat JSON object per line. Blank lines are ignored.
    pub fn read_jsonl<R: Read>(&self, reader: R) -> Result<ZiDataset> {
        let mut rows = Vec::new();
        let mut error_count = 0;

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Value>(&line) {
                Ok(Value::Object(map)) => rows.push(map),
                Ok(_) => {
                    error_count += 1;
                    self.tolerate_error(error_count, idx, "line is not a JSON object")?;
                }
                Err(e) => {
                    error_count += 1;
                    self.tolerate_error(error_count, idx, &e.to_string())?;
                }
            }
        }

        dataset_from_objects(rows)
    }

    fn tolerate_error(&self, error_count: usize, row: usize, message: &str) -> Result<()> {
        if !self.config.skip_errors || error_count > self.config.max_errors {
            return Err(ZiError::invalid_input(format!(
                "malformed row {row} ({error_count} errors so far): {message}"
            )));
        }
        log::warn!("skipping malformed row {}: {}", row, message);
        Ok(())
    }
}

/// Builds columns in first-appearance order. Missing keys load as null.
fn dataset_from_objects(rows: Vec<Map<String, Value>>) -> Result<ZiDataset> {
    let mut names: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for row in &rows {
        for key in row.keys() {
            if seen.insert(key.clone()) {
                names.push(key.clone());
            }
        }
    }

    let columns = names
        .into_iter()
        .map(|name| {
            let values: Vec<Value> = rows
                .iter()
                .map(|row| row.get(&name).cloned().unwrap_or(Value::Null))
                .collect();
            json_column(name, values)
        })
        .collect();

    ZiDataset::new(columns)
}

fn json_column(name: String, values: Vec<Value>) -> ZiColumn {
    let non_null: Vec<&Value> = values.iter().filter(|v| !v.is_null()).collect();

    if !non_null.is_empty() && non_null.iter().all(|v| v.is_number()) {
        let integral = non_null.iter().all(|v| v.as_i64().is_some());
        let cells = values
            .iter()
            .map(|v| match v {
                Value::Number(n) if integral => n.as_i64().map_or(ZiValue::Null, ZiValue::Integer),
                Value::Number(n) => n.as_f64().map_or(ZiValue::Null, ZiValue::Float),
                _ => ZiValue::Null,
            })
            .collect();
        return ZiColumn::new(name, ZiValueType::Numeric, cells);
    }

    if !non_null.is_empty() && non_null.iter().all(|v| v.is_boolean()) {
        let cells = values
            .iter()
            .map(|v| v.as_bool().map_or(ZiValue::Null, ZiValue::Boolean))
            .collect();
        return ZiColumn::new(name, ZiValueType::Boolean, cells);
    }

    let cells = values
        .into_iter()
        .map(|v| match v {
            Value::Null => ZiValue::Null,
            Value::String(s) => ZiValue::Text(s),
            other => ZiValue::Text(other.to_string()),
        })
        .collect();
    ZiColumn::new(name, ZiValueType::Textual, cells)
}
