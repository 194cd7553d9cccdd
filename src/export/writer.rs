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

//! # Data Writer Module
//!
//! Dataset serialization to CSV, JSON and JSONL.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::dataset::ZiDataset;
use crate::errors::{Result, ZiError};
use crate::ingest::format::{ZiDataFormat, ZiFormatDetector};
use crate::value::{ZiValue, ZIEDA_TEMPORAL_RENDER_FORMAT};

/// Statistics about a completed write.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiWriteStats {
    pub format: Option<ZiDataFormat>,
    pub rows_written: usize,
    pub columns_written: usize,
}

/// Writes datasets to files or any `Write` sink.
#[derive(Clone, Debug)]
pub struct ZiDatasetWriter {
    pretty: bool,
    delimiter: u8,
}

impl Default for ZiDatasetWriter {
    fn default() -> Self {
        Self {
            pretty: false,
            delimiter: b',',
        }
    }
}

impl ZiDatasetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-print JSON output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Field delimiter for CSV output.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Writes to `path`, choosing the format from its extension.
    pub fn write_path(&self, dataset: &ZiDataset, path: &Path) -> Result<ZiWriteStats> {
        let format = ZiFormatDetector::new().detect_from_path(path)?;
        if format == ZiDataFormat::Unknown {
            return Err(ZiError::validation(format!(
                "unknown file format: {}",
                path.display()
            )));
        }

        let mut writer = BufWriter::new(File::create(path)?);
        let mut stats = match format {
            ZiDataFormat::Csv => self.write_csv_or_reject(dataset, &mut writer)?,
            ZiDataFormat::Json => self.write_json(dataset, &mut writer)?,
            _ => self.write_jsonl(dataset, &mut writer)?,
        };
        writer.flush()?;
        stats.format = Some(format);

        log::info!(
            "wrote {} rows x {} columns to {}",
            stats.rows_written,
            stats.columns_written,
            path.display()
        );
        Ok(stats)
    }

    #[cfg(feature = "csv")]
    fn write_csv_or_reject<W: Write>(&self, dataset: &ZiDataset, writer: W) -> Result<ZiWriteStats> {
        self.write_csv(dataset, writer)
    }

    #[cfg(not(feature = "csv"))]
    fn write_csv_or_reject<W: Write>(&self, _dataset: &ZiDataset, _writer: W) -> Result<ZiWriteStats> {
        Err(ZiError::validation("csv support is not enabled"))
    }

    /// Writes a header row and one row per record. Nulls become empty fields.
    #[cfg(feature = "csv")]
    pub fn write_csv<W: Write>(&self, dataset: &ZiDataset, writer: W) -> Result<ZiWriteStats> {
        dataset.validate()?;
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        csv_writer.write_record(dataset.column_names())?;
        for row in 0..dataset.row_count() {
            let fields: Vec<String> = dataset
                .columns()
                .iter()
                .map(|column| {
                    column
                        .values
                        .get(row)
                        .and_then(ZiValue::render)
                        .unwrap_or_default()
                })
                .collect();
            csv_writer.write_record(&fields)?;
        }
        csv_writer.flush()?;

        Ok(ZiWriteStats {
            format: Some(ZiDataFormat::Csv),
            rows_written: dataset.row_count(),
            columns_written: dataset.column_count(),
        })
    }

    /// Writes a JSON array of row objects.
    pub fn write_json<W: Write>(&self, dataset: &ZiDataset, writer: W) -> Result<ZiWriteStats> {
        dataset.validate()?;
        let rows: Vec<Value> = (0..dataset.row_count())
            .map(|row| Value::Object(row_object(dataset, row)))
            .collect();

        if self.pretty {
            serde_json::to_writer_pretty(writer, &rows)?;
        } else {
            serde_json::to_writer(writer, &rows)?;
        }

        Ok(ZiWriteStats {
            format: Some(ZiDataFormat::Json),
            rows_written: rows.len(),
            columns_written: dataset.column_count(),
        })
    }

    /// Writes one row object per line.
    pub fn write_jsonl<W: Write>(&self, dataset: &ZiDataset, mut writer: W) -> Result<ZiWriteStats> {
        dataset.validate()?;
        for row in 0..dataset.row_count() {
            serde_json::to_writer(&mut writer, &row_object(dataset, row))?;
            writer.write_all(b"\n")?;
        }

        Ok(ZiWriteStats {
            format: Some(ZiDataFormat::Jsonl),
            rows_written: dataset.row_count(),
            columns_written: dataset.column_count(),
        })
    }
}

fn row_object(dataset: &ZiDataset, row: usize) -> Map<String, Value> {
    dataset
        .columns()
        .iter()
        .map(|column| {
            let cell = column.values.get(row).map_or(Value::Null, cell_to_json);
            (column.name.clone(), cell)
        })
        .collect()
}

fn cell_to_json(value: &ZiValue) -> Value {
    if value.is_null() {
        return Value::Null;
    }
    match value {
        ZiValue::Null => Value::Null,
        ZiValue::Text(s) => Value::String(s.clone()),
        ZiValue::Integer(i) => Value::from(*i),
        ZiValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        ZiValue::Temporal(t) => Value::String(t.format(ZIEDA_TEMPORAL_RENDER_FORMAT).to_string()),
        ZiValue::Boolean(b) => Value::Bool(*b),
    }
}
