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

use zieda::dataset::{ZiColumn, ZiDataset};
use zieda::errors::ZiError;
use zieda::value::{ZiValue, ZiValueType};

fn sample() -> ZiDataset {
    ZiDataset::new(vec![
        ZiColumn::textual("quantity", ["1", "2", "3"]),
        ZiColumn::textual("status", [Some("active"), None, Some("inactive")]),
        ZiColumn::new(
            "flag",
            ZiValueType::Boolean,
            vec![ZiValue::Boolean(true), ZiValue::Null, ZiValue::Boolean(false)],
        ),
    ])
    .unwrap()
}

#[test]
fn dataset_exposes_shape_and_schema() {
    let dataset = sample();

    assert_eq!(dataset.row_count(), 3);
    assert_eq!(dataset.column_count(), 3);
    assert_eq!(dataset.column_names(), vec!["quantity", "status", "flag"]);
    assert_eq!(dataset.textual_columns(), vec!["quantity", "status"]);
    assert_eq!(
        dataset.schema()[2],
        ("flag".to_string(), ZiValueType::Boolean)
    );
    assert!(dataset.contains_column("status"));
    assert!(!dataset.contains_column("missing"));
}

#[test]
fn column_counts_nulls() {
    let dataset = sample();
    let status = dataset.column("status").unwrap();

    assert_eq!(status.null_count(), 1);
    assert_eq!(status.non_null_count(), 2);
    assert_eq!(status.non_null_values().count(), 2);
}

#[test]
fn empty_dataset_has_zero_rows() {
    let dataset = ZiDataset::new(Vec::new()).unwrap();
    assert_eq!(dataset.row_count(), 0);
    assert_eq!(dataset.column_count(), 0);
}

#[test]
fn ragged_columns_are_invalid_input() {
    let err = ZiDataset::new(vec![
        ZiColumn::textual("a", ["1", "2"]),
        ZiColumn::textual("b", ["1"]),
    ])
    .unwrap_err();

    assert!(matches!(err, ZiError::InvalidInput { .. }), "got {err:?}");
}

#[test]
fn duplicate_names_are_invalid_input() {
    let err = ZiDataset::new(vec![
        ZiColumn::textual("a", ["1"]),
        ZiColumn::textual("a", ["2"]),
    ])
    .unwrap_err();

    match err {
        ZiError::InvalidInput { message } => assert!(message.contains("duplicate")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn cells_must_match_declared_type() {
    let err = ZiDataset::new(vec![ZiColumn::new(
        "n",
        ZiValueType::Numeric,
        vec![ZiValue::Integer(1), ZiValue::text("two")],
    )])
    .unwrap_err();

    assert!(matches!(err, ZiError::InvalidInput { .. }));
}

#[test]
fn with_column_rejects_mismatched_length() {
    let dataset = sample();
    let err = dataset
        .with_column(ZiColumn::textual("extra", ["x"]))
        .unwrap_err();

    assert!(matches!(err, ZiError::InvalidInput { .. }));
}

#[test]
fn deserialized_dataset_is_checked_on_validate() {
    let raw = r#"{"columns": [
        {"name": "a", "value_type": "textual", "values": [{"type": "text", "value": "x"}]},
        {"name": "b", "value_type": "textual", "values": []}
    ]}"#;
    let dataset: ZiDataset = serde_json::from_str(raw).unwrap();

    assert!(matches!(
        dataset.validate(),
        Err(ZiError::InvalidInput { .. })
    ));
}
