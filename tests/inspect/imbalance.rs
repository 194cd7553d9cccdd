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
use zieda::imbalance::{
    analyze_imbalance, ZiImbalanceAnalyzer, ZiImbalanceOutcome, ZiNoDataReason,
    ZIEDA_IMBALANCE_THRESHOLD,
};
use zieda::inference::infer_types;
use zieda::value::{ZiClassKey, ZiValue, ZiValueType};

fn key(s: &str) -> ZiClassKey {
    ZiClassKey::Text(s.to_string())
}

fn single(name: &str, values: Vec<&str>) -> ZiDataset {
    ZiDataset::new(vec![ZiColumn::textual(name, values)]).unwrap()
}

fn repeated(parts: &[(&'static str, usize)]) -> Vec<&'static str> {
    parts
        .iter()
        .flat_map(|(value, n)| std::iter::repeat(*value).take(*n))
        .collect()
}

#[test]
fn end_to_end_status_distribution() {
    let input = ZiDataset::new(vec![
        ZiColumn::textual("quantity", ["1", "2", "3"]),
        ZiColumn::textual("status", ["active", "active", "inactive"]),
    ])
    .unwrap();
    let cleaned = infer_types(&input).unwrap().dataset;

    let outcome = analyze_imbalance(&cleaned, "status").unwrap();
    let report = outcome.report().expect("status has values");

    assert_eq!(report.total, 3);
    assert_eq!(report.count_of(&key("active")), 2);
    assert_eq!(report.count_of(&key("inactive")), 1);
    assert!((report.ratio_of(&key("active")) - 2.0 / 3.0).abs() < 1e-12);
    assert!((report.ratio_of(&key("inactive")) - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(report.dominant_class, key("active"));
    assert_eq!(report.minority_class, key("inactive"));
    assert!((report.imbalance_ratio - 2.0).abs() < 1e-12);
    assert!(!report.is_imbalanced);
}

#[test]
fn ratio_exactly_at_threshold_is_not_imbalanced() {
    let dataset = single("label", vec!["A", "A", "A", "A", "B"]);

    let report = analyze_imbalance(&dataset, "label")
        .unwrap()
        .into_report()
        .unwrap();

    assert_eq!(report.max_ratio, ZIEDA_IMBALANCE_THRESHOLD);
    assert!(!report.is_imbalanced);
}

#[test]
fn ratio_above_threshold_is_imbalanced() {
    let dataset = single("label", repeated(&[("A", 81), ("B", 19)]));

    let report = analyze_imbalance(&dataset, "label")
        .unwrap()
        .into_report()
        .unwrap();

    assert!((report.max_ratio - 0.81).abs() < 1e-12);
    assert!(report.is_imbalanced);
    assert_eq!(report.dominant_class, key("A"));
}

#[test]
fn missing_column_is_reported_before_counting() {
    let dataset = single("label", vec!["A"]);

    let err = ZiImbalanceAnalyzer::new()
        .analyze(&dataset, "nonexistent")
        .unwrap_err();

    assert_eq!(
        err,
        ZiError::ColumnNotFound {
            column: "nonexistent".to_string()
        }
    );
}

#[test]
fn all_null_column_yields_no_data() {
    let dataset =
        ZiDataset::new(vec![ZiColumn::textual("label", [None::<&str>, None, None])]).unwrap();

    let outcome = analyze_imbalance(&dataset, "label").unwrap();

    assert!(outcome.is_no_data());
    match outcome {
        ZiImbalanceOutcome::NoData(no_data) => {
            assert_eq!(no_data.column, "label");
            assert_eq!(no_data.reason, ZiNoDataReason::AllNull);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn zero_row_column_yields_no_data() {
    let dataset = ZiDataset::new(vec![ZiColumn::textual("label", Vec::<&str>::new())]).unwrap();

    match analyze_imbalance(&dataset, "label").unwrap() {
        ZiImbalanceOutcome::NoData(no_data) => {
            assert_eq!(no_data.reason, ZiNoDataReason::EmptyColumn)
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn nulls_are_excluded_from_counts() {
    let dataset = ZiDataset::new(vec![ZiColumn::textual(
        "label",
        [Some("x"), None, Some("y"), None, Some("x")],
    )])
    .unwrap();

    let report = analyze_imbalance(&dataset, "label")
        .unwrap()
        .into_report()
        .unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.class_count(), 2);
    assert_eq!(report.counts.values().sum::<usize>(), 3);
}

#[test]
fn tie_goes_to_first_value_in_row_order() {
    let first_b = single("label", vec!["b", "a", "a", "b"]);
    let first_a = single("label", vec!["a", "b", "b", "a"]);

    let report_b = analyze_imbalance(&first_b, "label")
        .unwrap()
        .into_report()
        .unwrap();
    let report_a = analyze_imbalance(&first_a, "label")
        .unwrap()
        .into_report()
        .unwrap();

    assert_eq!(report_b.dominant_class, key("b"));
    assert_eq!(report_a.dominant_class, key("a"));
    assert_eq!(report_b.max_ratio, 0.5);
}

#[test]
fn numeric_classes_are_counted_by_value() {
    let dataset = ZiDataset::new(vec![ZiColumn::new(
        "grade",
        ZiValueType::Numeric,
        vec![
            ZiValue::Integer(3),
            ZiValue::Integer(3),
            ZiValue::Integer(1),
            ZiValue::Float(f64::NAN),
        ],
    )])
    .unwrap();

    let report = analyze_imbalance(&dataset, "grade")
        .unwrap()
        .into_report()
        .unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.dominant_class, ZiClassKey::Integer(3));
    assert_eq!(report.count_of(&ZiClassKey::Integer(1)), 1);
}

#[test]
fn equal_integer_and_float_cells_are_one_class() {
    let dataset = ZiDataset::new(vec![ZiColumn::new(
        "score",
        ZiValueType::Numeric,
        vec![
            ZiValue::Integer(1),
            ZiValue::Float(1.0),
            ZiValue::Integer(2),
            ZiValue::Float(-0.0),
            ZiValue::Integer(0),
        ],
    )])
    .unwrap();

    let report = analyze_imbalance(&dataset, "score")
        .unwrap()
        .into_report()
        .unwrap();

    assert_eq!(report.class_count(), 3);
    assert_eq!(report.count_of(&ZiClassKey::Integer(1)), 2);
    assert_eq!(report.count_of(&ZiClassKey::Float(1.0)), 2);
    assert_eq!(report.count_of(&ZiClassKey::Float(-0.0)), 2);
    assert_eq!(report.ratio_of(&ZiClassKey::Integer(0)), 0.4);
    assert_eq!(report.dominant_class, ZiClassKey::Integer(1));
    assert_eq!(report.minority_class, ZiClassKey::Integer(2));

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["counts"]["1"], 2);
    assert!(value["counts"].get("1.0").is_none());
}

#[test]
fn single_class_column_is_fully_dominated() {
    let dataset = single("label", vec!["only", "only"]);

    let report = analyze_imbalance(&dataset, "label")
        .unwrap()
        .into_report()
        .unwrap();

    assert_eq!(report.max_ratio, 1.0);
    assert_eq!(report.dominant_class, report.minority_class);
    assert!(report.is_imbalanced);
}

#[test]
fn report_serializes_with_string_keys() {
    let dataset = single("label", vec!["x", "y", "x"]);

    let outcome = analyze_imbalance(&dataset, "label").unwrap();
    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["status"], "report");
    assert_eq!(value["counts"]["x"], 2);
    assert_eq!(value["dominant_class"], "x");
    assert_eq!(value["is_imbalanced"], false);
}
