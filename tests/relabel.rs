// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! End-to-end tests for category relabeling.
//!
//! Loads survey-style coded columns, re-views them under alternate label
//! groups, and checks the concat and schema-loading paths.

use std::fs;

use tempfile::TempDir;

use vicar::error::RelabelError;
use vicar::relabel::{CodedColumn, Label, RelabelDtype, Schema};

// ============================================================================
// Fixtures
// ============================================================================

fn gender_dtype() -> RelabelDtype {
    RelabelDtype::new(
        vec![
            vec![Label::Int(1), Label::from("male")],
            vec![Label::Int(2), Label::from("female")],
        ],
        false,
    )
    .unwrap()
}

fn educ_dtype() -> RelabelDtype {
    RelabelDtype::new(
        vec![
            vec![Label::Int(1), Label::from("grade school")],
            vec![Label::Int(2), Label::from("high school")],
            vec![Label::Int(3), Label::from("some college")],
            vec![Label::Int(4), Label::from("college or advanced degree")],
        ],
        true,
    )
    .unwrap()
}

// ============================================================================
// Releveling
// ============================================================================

#[test]
fn test_relevel_views_codes_through_names() {
    let educ = CodedColumn::from_labels(
        &[2, 3, 3, 1, 2, 4, 3, 2].map(Label::Int),
        educ_dtype(),
    );
    let named = educ.relevel(1).unwrap();

    assert_eq!(named.codes(), educ.codes());
    assert_eq!(
        named.labels()[..3],
        [
            Some(Label::from("high school")),
            Some(Label::from("some college")),
            Some(Label::from("some college")),
        ]
    );
    assert_eq!(
        named.get(5),
        Some(&Label::from("college or advanced degree"))
    );
}

#[test]
fn test_relevel_round_trip_restores_labels() {
    let column = CodedColumn::from_strings(&["1", "2", "1"], gender_dtype());
    let restored = column.relevel(1).unwrap().relevel(0).unwrap();

    assert_eq!(restored.labels(), column.labels());
    assert_eq!(restored.codes(), column.codes());
}

#[test]
fn test_ordered_flag_survives_relevel() {
    let educ = educ_dtype();
    assert!(educ.ordered());
    assert!(educ.relevel(1).unwrap().ordered());
}

// ============================================================================
// String loading
// ============================================================================

#[test]
fn test_from_strings_with_missing_entries() {
    // Survey extracts carry blanks; they come through as missing codes.
    let column = CodedColumn::from_strings(&["1", "2", "", "2", "1"], gender_dtype());

    assert_eq!(
        column.codes(),
        &[Some(0), Some(1), None, Some(1), Some(0)]
    );
    let named = column.relevel(1).unwrap();
    assert_eq!(named.get(0), Some(&Label::from("male")));
    assert_eq!(named.get(2), None);
}

// ============================================================================
// Concatenation
// ============================================================================

#[test]
fn test_concat_preserves_first_active_group() {
    let left = CodedColumn::from_strings(&["1", "2"], gender_dtype())
        .relevel(1)
        .unwrap();
    let right = CodedColumn::from_strings(&["2", "1"], gender_dtype());

    let joined = CodedColumn::concat(&[left, right]).unwrap();
    assert_eq!(joined.len(), 4);
    assert_eq!(joined.dtype().active_group(), 1);
    assert_eq!(
        joined.labels(),
        vec![
            Some(Label::from("male")),
            Some(Label::from("female")),
            Some(Label::from("female")),
            Some(Label::from("male")),
        ]
    );
}

#[test]
fn test_concat_rejects_different_dtypes() {
    let gender = CodedColumn::from_strings(&["1"], gender_dtype());
    let educ = CodedColumn::from_strings(&["3"], educ_dtype());

    assert!(matches!(
        CodedColumn::concat(&[gender, educ]),
        Err(RelabelError::MismatchedGroups)
    ));
}

// ============================================================================
// Schema loading
// ============================================================================

const SCHEMA_JSON: &str = r#"{
    "gender": { "levels": [[1, "male"], [2, "female"]] },
    "race": { "levels": [[1, "white"], [2, "black"], [3, "other"]] },
    "educ": {
        "levels": [
            [1, "grade school"],
            [2, "high school"],
            [3, "some college"],
            [4, "college or advanced degree"]
        ],
        "ordered": true
    }
}"#;

#[test]
fn test_schema_file_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("columns.json");
    fs::write(&path, SCHEMA_JSON).unwrap();

    let schema = Schema::from_file(&path).unwrap();
    assert_eq!(schema.len(), 3);

    let race = schema.dtype("race").unwrap().unwrap();
    let column = CodedColumn::from_strings(&["1", "1", "2", "", "3"], race);
    let named = column.relevel(1).unwrap();

    assert_eq!(named.get(2), Some(&Label::from("black")));
    assert_eq!(named.get(3), None);
    assert_eq!(named.get(4), Some(&Label::from("other")));
}

#[test]
fn test_schema_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = Schema::from_file(&temp.path().join("absent.json"));
    assert!(matches!(result, Err(RelabelError::IoError(_))));
}

#[test]
fn test_schema_rejects_ragged_levels() {
    let schema = Schema::from_json(
        r#"{ "bad": { "levels": [[1, "a"], [2]] } }"#,
    )
    .unwrap();
    assert!(matches!(
        schema.dtype("bad").unwrap(),
        Err(RelabelError::RaggedLevels { .. })
    ));
}
