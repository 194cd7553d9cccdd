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

//! # Zieda Value Module
//!
//! Cell values, declared column types and the per-value parsers used by type
//! inference.
//!
//! ## Cell Model
//!
//! Every cell is a [`ZiValue`]. A column declares a [`ZiValueType`] and a cell
//! is compatible with it when it is null or its variant belongs to that type.
//! `Float(NaN)` is the missing-value marker of numeric data and counts as null.
//!
//! ## Parsing
//!
//! [`ZiTemporalFormat`] and [`parse_numeric`] turn a single text literal into a
//! typed value or a [`ZiParseError`]. They never look at more than one value;
//! column-level decisions live in the inference module.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Rendering used for temporal cells in keys and exports.
pub const ZIEDA_TEMPORAL_RENDER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Declared type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiValueType {
    Textual,
    Numeric,
    Temporal,
    Boolean,
}

impl ZiValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZiValueType::Textual => "textual",
            ZiValueType::Numeric => "numeric",
            ZiValueType::Temporal => "temporal",
            ZiValueType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ZiValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ZiValue {
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Temporal(NaiveDateTime),
    Boolean(bool),
}

impl ZiValue {
    /// Convenience constructor for text cells.
    pub fn text(value: impl Into<String>) -> Self {
        ZiValue::Text(value.into())
    }

    /// Returns true for `Null` and for NaN floats.
    pub fn is_null(&self) -> bool {
        match self {
            ZiValue::Null => true,
            ZiValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Type family of the cell, `None` when the cell is null.
    pub fn value_type(&self) -> Option<ZiValueType> {
        if self.is_null() {
            return None;
        }
        match self {
            ZiValue::Null => None,
            ZiValue::Text(_) => Some(ZiValueType::Textual),
            ZiValue::Integer(_) | ZiValue::Float(_) => Some(ZiValueType::Numeric),
            ZiValue::Temporal(_) => Some(ZiValueType::Temporal),
            ZiValue::Boolean(_) => Some(ZiValueType::Boolean),
        }
    }

    /// Whether the cell may appear in a column declared as `value_type`.
    pub fn is_compatible_with(&self, value_type: ZiValueType) -> bool {
        self.value_type().map_or(true, |own| own == value_type)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ZiValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Key used for distinct-value counting, `None` for null cells.
    pub fn class_key(&self) -> Option<ZiClassKey> {
        if self.is_null() {
            return None;
        }
        match self {
            ZiValue::Null => None,
            ZiValue::Text(s) => Some(ZiClassKey::Text(s.clone())),
            ZiValue::Integer(i) => Some(ZiClassKey::Integer(*i)),
            ZiValue::Float(f) => Some(ZiClassKey::float(*f)),
            ZiValue::Temporal(t) => Some(ZiClassKey::Temporal(*t)),
            ZiValue::Boolean(b) => Some(ZiClassKey::Boolean(*b)),
        }
    }

    /// Text rendering of the cell, `None` when null.
    pub fn render(&self) -> Option<String> {
        self.class_key().map(|key| key.to_string())
    }
}

impl From<&str> for ZiValue {
    fn from(value: &str) -> Self {
        ZiValue::Text(value.to_string())
    }
}

impl From<Option<&str>> for ZiValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(ZiValue::Null, ZiValue::from)
    }
}

/// Hashable, totally ordered identity of a non-null cell.
///
/// `Integer` and `Float` keys compare by numeric value, so `Integer(1)` and
/// `Float(1.0)` are the same class. Floats order by `total_cmp` with `-0.0`
/// folded into `0.0`, including keys built directly from the variants. NaN
/// never becomes a key through [`ZiValue::class_key`].
#[derive(Clone, Debug)]
pub enum ZiClassKey {
    Text(String),
    Integer(i64),
    Float(f64),
    Temporal(NaiveDateTime),
    Boolean(bool),
}

// 2^63, the first float above every i64.
const ZIEDA_I64_FLOAT_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn fold_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// `value` as an i64 when it is integral and in range.
fn exact_integer(value: f64) -> Option<i64> {
    let in_range = (-ZIEDA_I64_FLOAT_BOUND..ZIEDA_I64_FLOAT_BOUND).contains(&value);
    (in_range && value.fract() == 0.0).then_some(value as i64)
}

/// Exact comparison of an integer against a float.
fn cmp_integer_float(int: i64, float: f64) -> Ordering {
    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= ZIEDA_I64_FLOAT_BOUND {
        return Ordering::Less;
    }
    if float < -ZIEDA_I64_FLOAT_BOUND {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => fold_zero(whole).total_cmp(&fold_zero(float)),
        other => other,
    }
}

impl ZiClassKey {
    fn float(value: f64) -> Self {
        ZiClassKey::Float(fold_zero(value))
    }

    fn rank(&self) -> u8 {
        match self {
            ZiClassKey::Text(_) => 0,
            ZiClassKey::Integer(_) | ZiClassKey::Float(_) => 1,
            ZiClassKey::Temporal(_) => 2,
            ZiClassKey::Boolean(_) => 3,
        }
    }

    /// Converts the key back into a cell value.
    pub fn to_value(&self) -> ZiValue {
        match self {
            ZiClassKey::Text(s) => ZiValue::Text(s.clone()),
            ZiClassKey::Integer(i) => ZiValue::Integer(*i),
            ZiClassKey::Float(f) => ZiValue::Float(*f),
            ZiClassKey::Temporal(t) => ZiValue::Temporal(*t),
            ZiClassKey::Boolean(b) => ZiValue::Boolean(*b),
        }
    }
}

impl PartialEq for ZiClassKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ZiClassKey {}

impl PartialOrd for ZiClassKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZiClassKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ZiClassKey::Text(a), ZiClassKey::Text(b)) => a.cmp(b),
            (ZiClassKey::Integer(a), ZiClassKey::Integer(b)) => a.cmp(b),
            (ZiClassKey::Float(a), ZiClassKey::Float(b)) => fold_zero(*a).total_cmp(&fold_zero(*b)),
            (ZiClassKey::Integer(a), ZiClassKey::Float(b)) => cmp_integer_float(*a, *b),
            (ZiClassKey::Float(a), ZiClassKey::Integer(b)) => cmp_integer_float(*b, *a).reverse(),
            (ZiClassKey::Temporal(a), ZiClassKey::Temporal(b)) => a.cmp(b),
            (ZiClassKey::Boolean(a), ZiClassKey::Boolean(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

// Integral floats hash like the integer they equal.
impl Hash for ZiClassKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            ZiClassKey::Text(s) => s.hash(state),
            ZiClassKey::Integer(i) => i.hash(state),
            ZiClassKey::Float(f) => match exact_integer(*f) {
                Some(i) => i.hash(state),
                None => f.to_bits().hash(state),
            },
            ZiClassKey::Temporal(t) => t.hash(state),
            ZiClassKey::Boolean(b) => b.hash(state),
        }
    }
}

impl fmt::Display for ZiClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZiClassKey::Text(s) => f.write_str(s),
            ZiClassKey::Integer(i) => write!(f, "{i}"),
            ZiClassKey::Float(v) => write!(f, "{v:?}"),
            ZiClassKey::Temporal(t) => write!(f, "{}", t.format(ZIEDA_TEMPORAL_RENDER_FORMAT)),
            ZiClassKey::Boolean(b) => write!(f, "{b}"),
        }
    }
}

// Serialized as its text rendering so keys work as JSON object keys.
impl Serialize for ZiClassKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Failure to parse one literal. Never escapes the inference engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ZiParseError {
    #[error("'{literal}' is not a temporal literal")]
    NotTemporal { literal: String },

    #[error("'{literal}' is not a numeric literal")]
    NotNumeric { literal: String },
}

/// Candidate layouts for temporal literals, in detection order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZiTemporalFormat {
    /// RFC 3339 with offset, normalised to UTC.
    Rfc3339,
    /// Naive date-time layout for `NaiveDateTime::parse_from_str`.
    DateTime(&'static str),
    /// Date-only layout, resolved to midnight.
    Date(&'static str),
    /// RFC 2822, normalised to UTC.
    Rfc2822,
}

const ZIEDA_TEMPORAL_CANDIDATES: &[ZiTemporalFormat] = &[
    ZiTemporalFormat::Rfc3339,
    ZiTemporalFormat::DateTime("%Y-%m-%dT%H:%M:%S%.f"),
    ZiTemporalFormat::DateTime("%Y-%m-%d %H:%M:%S%.f"),
    ZiTemporalFormat::DateTime("%Y-%m-%dT%H:%M"),
    ZiTemporalFormat::DateTime("%Y-%m-%d %H:%M"),
    ZiTemporalFormat::Date("%Y-%m-%d"),
    ZiTemporalFormat::DateTime("%Y/%m/%d %H:%M:%S"),
    ZiTemporalFormat::DateTime("%Y/%m/%d %H:%M"),
    ZiTemporalFormat::Date("%Y/%m/%d"),
    ZiTemporalFormat::DateTime("%m/%d/%Y %H:%M:%S"),
    ZiTemporalFormat::DateTime("%m/%d/%Y %H:%M"),
    ZiTemporalFormat::Date("%m/%d/%Y"),
    ZiTemporalFormat::Date("%d-%b-%Y"),
    ZiTemporalFormat::Date("%B %d, %Y"),
    ZiTemporalFormat::Rfc2822,
];

impl ZiTemporalFormat {
    /// First candidate layout that accepts `literal`.
    pub fn detect(literal: &str) -> Option<Self> {
        let literal = literal.trim();
        ZIEDA_TEMPORAL_CANDIDATES
            .iter()
            .copied()
            .find(|format| format.parse(literal).is_ok())
    }

    /// Parses `literal` under this layout only.
    pub fn parse(&self, literal: &str) -> Result<NaiveDateTime, ZiParseError> {
        let trimmed = literal.trim();
        let parsed = match self {
            ZiTemporalFormat::Rfc3339 => DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.naive_utc()),
            ZiTemporalFormat::Rfc2822 => DateTime::parse_from_rfc2822(trimmed)
                .ok()
                .map(|dt| dt.naive_utc()),
            ZiTemporalFormat::DateTime(layout) => {
                NaiveDateTime::parse_from_str(trimmed, layout).ok()
            }
            ZiTemporalFormat::Date(layout) => NaiveDate::parse_from_str(trimmed, layout)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN)),
        };
        parsed.ok_or_else(|| ZiParseError::NotTemporal {
            literal: literal.to_string(),
        })
    }
}

fn numeric_literal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$")
            .expect("numeric literal pattern compiles")
    })
}

fn integer_literal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-]?\d+$").expect("integer literal pattern compiles"))
}

/// Parses a finite decimal literal into `Integer` or `Float`.
///
/// Integers that overflow `i64` fall back to `Float`. `inf`, `nan` and digit
/// separators are rejected.
pub fn parse_numeric(literal: &str) -> Result<ZiValue, ZiParseError> {
    let trimmed = literal.trim();
    let rejected = || ZiParseError::NotNumeric {
        literal: literal.to_string(),
    };

    if !numeric_literal_pattern().is_match(trimmed) {
        return Err(rejected());
    }
    if integer_literal_pattern().is_match(trimmed) {
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(ZiValue::Integer(i));
        }
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(ZiValue::Float(f)),
        _ => Err(rejected()),
    }
}
