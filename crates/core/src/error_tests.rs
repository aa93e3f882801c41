// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::error::Error as _;

#[test]
fn display_includes_filename_kind_and_message() {
    let err = LoadError::new(Some("a.yaml"), LoadErrorKind::Shape, "document stream is empty");
    assert_eq!(err.to_string(), "a.yaml: ShapeError: document stream is empty");
}

#[test]
fn display_marks_inline_settings() {
    let err = LoadError::new(None, LoadErrorKind::Io, "gone");
    assert_eq!(err.to_string(), "<inline>: IoError: gone");
}

#[test]
fn circular_keeps_cycle_as_source() {
    let cycle = CycleError {
        chain: vec!["a.yaml".to_string(), "a.yaml".to_string()],
    };
    let err = LoadError::circular("a.yaml", cycle);

    assert_eq!(err.kind, LoadErrorKind::CircularReference);
    assert_eq!(err.kind_name(), "CircularReference");
    assert_eq!(err.filename.as_deref(), Some("a.yaml"));
    assert_eq!(err.message, "circular reference detected: [a.yaml, a.yaml]");
    assert!(err.source().is_some());
}

#[test]
fn shape_errors_carry_their_line() {
    let err = LoadError::shape(
        Some("a.yaml"),
        ShapeError::NotASequence {
            found: "mapping",
            line: Some(4),
        },
    );
    assert_eq!(err.kind_name(), "ShapeError");
    assert_eq!(err.line, Some(4));
}

#[test]
fn scenario_error_exposes_load_errors() {
    let err: ScenarioError<std::io::Error> =
        LoadError::new(None, LoadErrorKind::Header, "bad").into();
    assert_eq!(err.as_load_error().map(|e| e.kind), Some(LoadErrorKind::Header));

    let err: ScenarioError<std::io::Error> =
        ScenarioError::Action(std::io::Error::other("factory"));
    assert!(err.as_load_error().is_none());
    assert_eq!(err.to_string(), "factory");
}
