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

use chrono::NaiveDate;
use zieda::dataset::{ZiColumn, ZiDataset};
use zieda::errors::ZiError;
use zieda::inference::{infer_types, ZiTypeInference};
use zieda::value::{ZiValue, ZiValueType};

fn dataset(columns: Vec<ZiColumn>) -> ZiDataset {
    ZiDataset::new(columns).expect("fixture is well formed")
}

#[test]
fn quantity_becomes_numeric_and_status_stays_textual() {
    let input = dataset(vec![
        ZiColumn::textual("quantity", ["1", "2", "3"]),
        ZiColumn::textual("status", ["active", "active", "inactive"]),
    ]);

    let (cleaned, temporal, numeric) = infer_types(&input).unwrap().into_parts();

    assert!(temporal.is_empty());
    assert_eq!(numeric, vec!["quantity".to_string()]);
    let quantity = cleaned.column("quantity").unwrap();
    assert_eq!(quantity.value_type, ZiValueType::Numeric);
    assert_eq!(
        quantity.values,
        vec![ZiValue::Integer(1), ZiValue::Integer(2), ZiValue::Integer(3)]
    );
    assert_eq!(cleaned.column("status"), input.column("status"));
}

#[test]
fn dates_become_temporal_and_skip_numeric_attempt() {
    let input = dataset(vec![ZiColumn::textual(
        "created",
        [Some("2024-01-01"), None, Some("2024-02-15")],
    )]);

    let result = ZiTypeInference::new().infer(&input).unwrap();

    assert_eq!(result.temporal_columns, vec!["created".to_string()]);
    assert!(result.numeric_columns.is_empty());
    let created = result.dataset.column("created").unwrap();
    assert_eq!(created.value_type, ZiValueType::Temporal);
    assert_eq!(
        created.values[0],
        ZiValue::Temporal(
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        )
    );
    assert_eq!(created.values[1], ZiValue::Null);
}

#[test]
fn us_timestamps_without_seconds_become_temporal() {
    let input = dataset(vec![ZiColumn::textual(
        "opened",
        ["12/31/2024 10:00", "01/02/2025 08:30"],
    )]);

    let result = infer_types(&input).unwrap();

    assert_eq!(result.temporal_columns, vec!["opened".to_string()]);
    assert_eq!(
        result.dataset.column("opened").unwrap().values[1],
        ZiValue::Temporal(
            NaiveDate::from_ymd_opt(2025, 1, 2)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap()
        )
    );
}

#[test]
fn mixed_failure_column_is_left_untouched() {
    let input = dataset(vec![ZiColumn::textual(
        "mixed",
        ["2024-01-01", "not-a-date", "42"],
    )]);

    let result = infer_types(&input).unwrap();

    assert!(result.temporal_columns.is_empty());
    assert!(result.numeric_columns.is_empty());
    assert_eq!(result.dataset, input);
}

#[test]
fn one_float_makes_the_whole_column_float() {
    let input = dataset(vec![ZiColumn::textual("price", ["10", "12.5", " 7 "])]);

    let result = infer_types(&input).unwrap();
    let price = result.dataset.column("price").unwrap();

    assert_eq!(
        price.values,
        vec![ZiValue::Float(10.0), ZiValue::Float(12.5), ZiValue::Float(7.0)]
    );
}

#[test]
fn inconsistent_date_layouts_reject_temporal() {
    let input = dataset(vec![ZiColumn::textual(
        "when",
        ["2024-01-01", "01/02/2024"],
    )]);

    let result = infer_types(&input).unwrap();

    assert!(result.temporal_columns.is_empty());
    assert_eq!(result.dataset.column("when").unwrap().value_type, ZiValueType::Textual);
}

#[test]
fn typed_columns_are_not_inspected() {
    let input = dataset(vec![
        ZiColumn::new(
            "score",
            ZiValueType::Numeric,
            vec![ZiValue::Float(0.5), ZiValue::Integer(2)],
        ),
        ZiColumn::new(
            "ok",
            ZiValueType::Boolean,
            vec![ZiValue::Boolean(true), ZiValue::Null],
        ),
    ]);

    let result = infer_types(&input).unwrap();

    assert_eq!(result.converted_count(), 0);
    assert_eq!(result.dataset, input);
}

#[test]
fn all_null_textual_column_converts_to_temporal() {
    let input = dataset(vec![ZiColumn::textual("empty", [None::<&str>, None])]);

    let result = infer_types(&input).unwrap();

    assert_eq!(result.temporal_columns, vec!["empty".to_string()]);
    assert_eq!(
        result.dataset.column("empty").unwrap().values,
        vec![ZiValue::Null, ZiValue::Null]
    );
}

#[test]
fn empty_strings_are_values_not_nulls() {
    let input = dataset(vec![ZiColumn::textual("n", ["1", "", "3"])]);

    let result = infer_types(&input).unwrap();

    assert_eq!(result.converted_count(), 0);
}

#[test]
fn input_dataset_is_not_mutated() {
    let input = dataset(vec![
        ZiColumn::textual("quantity", ["1", "2"]),
        ZiColumn::textual("day", ["2024-03-01", "2024-03-02"]),
    ]);
    let before = input.clone();

    let result = infer_types(&input).unwrap();

    assert_eq!(input, before);
    assert_ne!(result.dataset, input);
    assert_eq!(result.dataset.column_names(), input.column_names());
    assert_eq!(result.dataset.row_count(), input.row_count());
}

#[test]
fn column_order_and_result_order_follow_input() {
    let input = dataset(vec![
        ZiColumn::textual("b_num", ["1"]),
        ZiColumn::textual("a_day", ["2024-01-01"]),
        ZiColumn::textual("c_num", ["2.0"]),
        ZiColumn::textual("d_day", ["2024-01-01 10:30"]),
    ]);

    let result = infer_types(&input).unwrap();

    assert_eq!(result.temporal_columns, vec!["a_day", "d_day"]);
    assert_eq!(result.numeric_columns, vec!["b_num", "c_num"]);
    assert_eq!(
        result.dataset.column_names(),
        vec!["b_num", "a_day", "c_num", "d_day"]
    );
}

#[test]
fn malformed_dataset_is_invalid_input() {
    let raw = r#"{"columns": [
        {"name": "a", "value_type": "textual", "values": [{"type": "text", "value": "1"}]},
        {"name": "b", "value_type": "textual", "values": []}
    ]}"#;
    let malformed: ZiDataset = serde_json::from_str(raw).unwrap();

    let err = infer_types(&malformed).unwrap_err();

    assert!(matches!(err, ZiError::InvalidInput { .. }), "got {err:?}");
}

#[test]
fn empty_dataset_infers_nothing() {
    let result = infer_types(&ZiDataset::default()).unwrap();

    assert_eq!(result.converted_count(), 0);
    assert_eq!(result.dataset.column_count(), 0);
}
