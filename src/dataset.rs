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

//! # Zieda Dataset Module
//!
//! In-memory tabular dataset: an ordered list of named columns sharing one row
//! count.
//!
//! ## Invariants
//!
//! - Every column holds the same number of cells
//! - Column names are unique
//! - Every non-null cell matches its column's declared [`ZiValueType`]
//!
//! [`ZiDataset::new`] enforces them on construction. A dataset that arrives
//! through serde is not checked until [`ZiDataset::validate`] runs, which the
//! inference engine does before touching it.
//!
//! ## Usage Example
//!
//! ```rust
//! use zieda::dataset::{ZiColumn, ZiDataset};
//!
//! fn main() -> zieda::Result<()> {
//!     let dataset = ZiDataset::new(vec![
//!         ZiColumn::textual("quantity", ["1", "2", "3"]),
//!         ZiColumn::textual("status", ["active", "active", "inactive"]),
//!     ])?;
//!     assert_eq!(dataset.row_count(), 3);
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::value::{ZiValue, ZiValueType};

/// A named, typed column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiColumn {
    pub name: String,
    pub value_type: ZiValueType,
    pub values: Vec<ZiValue>,
}

impl ZiColumn {
    pub fn new(name: impl Into<String>, value_type: ZiValueType, values: Vec<ZiValue>) -> Self {
        ZiColumn {
            name: name.into(),
            value_type,
            values,
        }
    }

    /// Builds a textual column. `None` entries become null cells.
    pub fn textual<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ZiValue>,
    {
        ZiColumn::new(
            name,
            ZiValueType::Textual,
            values.into_iter().map(Into::into).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    pub fn non_null_count(&self) -> usize {
        self.len() - self.null_count()
    }

    /// Non-null cells in row order.
    pub fn non_null_values(&self) -> impl Iterator<Item = &ZiValue> {
        self.values.iter().filter(|v| !v.is_null())
    }
}

/// Ordered collection of equal-length columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiDataset {
    columns: Vec<ZiColumn>,
}

impl ZiDataset {
    /// Builds a dataset and checks its invariants.
    pub fn new(columns: Vec<ZiColumn>) -> Result<Self> {
        let dataset = ZiDataset { columns };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Appends a column, rejecting it if it would break an invariant.
    pub fn with_column(mut self, column: ZiColumn) -> Result<Self> {
        self.columns.push(column);
        self.validate()?;
        Ok(self)
    }

    /// Checks row-count uniformity, name uniqueness and cell/type agreement.
    pub fn validate(&self) -> Result<()> {
        let expected_rows = self.row_count();
        let mut seen = HashSet::with_capacity(self.columns.len());

        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(ZiError::invalid_input(format!(
                    "duplicate column name '{}'",
                    column.name
                )));
            }
            if column.len() != expected_rows {
                return Err(ZiError::invalid_input(format!(
                    "column '{}' has {} rows, expected {}",
                    column.name,
                    column.len(),
                    expected_rows
                )));
            }
            if let Some(row) = column
                .values
                .iter()
                .position(|v| !v.is_compatible_with(column.value_type))
            {
                return Err(ZiError::invalid_input(format!(
                    "column '{}' is declared {} but row {} holds {:?}",
                    column.name, column.value_type, row, column.values[row]
                )));
            }
        }
        Ok(())
    }

    pub fn columns(&self) -> &[ZiColumn] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [ZiColumn] {
        &mut self.columns
    }

    pub fn into_columns(self) -> Vec<ZiColumn> {
        self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ZiColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Row count of the first column, zero for a dataset without columns.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, ZiColumn::len)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `(name, declared type)` pairs in column order.
    pub fn schema(&self) -> Vec<(String, ZiValueType)> {
        self.columns
            .iter()
            .map(|c| (c.name.clone(), c.value_type))
            .collect()
    }

    /// Names of the columns currently declared textual.
    pub fn textual_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.value_type == ZiValueType::Textual)
            .map(|c| c.name.as_str())
            .collect()
    }
}
