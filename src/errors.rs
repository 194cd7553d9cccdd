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

//! # Zieda Error Module
//!
//! This module defines the error types used throughout Zieda.
//!
//! ## Error Categories
//!
//! - **InvalidInput**: The dataset violates its structural invariants
//!   (ragged columns, duplicate names, cells that disagree with the declared type)
//! - **ColumnNotFound**: A requested target column is absent from the dataset
//! - **Validation**: Invalid configuration or reader parameters
//! - **Io**: Filesystem errors raised while loading or writing datasets
//! - **Serde**: JSON/YAML serialization issues
//! - **Csv**: CSV decoding and encoding errors
//! - **Internal**: Unexpected internal failures
//!
//! A per-column conversion failure during type inference is not an error, and
//! neither is an all-null target column during imbalance analysis. Both are
//! ordinary outcomes carried in the result values.
//!
//! Errors are structured values only. Callers decide how to render them.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zieda.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zieda.
#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
pub enum ZiError {
    /// The dataset is absent or violates the tabular invariants.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The requested column does not exist in the dataset.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Validation errors triggered by invalid parameters or configuration.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors originating from CSV decoding or encoding.
    #[error("csv error: {0}")]
    Csv(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for ZiError {
    fn from(err: csv::Error) -> Self {
        ZiError::Csv(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct invalid input errors.
    pub fn invalid_input<T: Into<String>>(message: T) -> Self {
        ZiError::InvalidInput {
            message: message.into(),
        }
    }

    /// Helper to construct column lookup errors.
    pub fn column_not_found<T: Into<String>>(column: T) -> Self {
        ZiError::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        ZiError::Internal(message.into())
    }
}
