// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    empty = { "" },
    tilde = { "~" },
    lower = { "null" },
    upper = { "NULL" },
)]
fn resolves_null(text: &str) {
    assert_eq!(resolve_plain(text), Scalar::Null);
}

#[parameterized(
    lower_true = { "true", true },
    title_true = { "True", true },
    lower_false = { "false", false },
    upper_false = { "FALSE", false },
)]
fn resolves_bool(text: &str, expected: bool) {
    assert_eq!(resolve_plain(text), Scalar::Bool(expected));
}

#[parameterized(
    decimal = { "42", 42 },
    negative = { "-7", -7 },
    plus = { "+3", 3 },
    hex = { "0x1f", 31 },
    octal = { "0o17", 15 },
)]
fn resolves_int(text: &str, expected: i64) {
    assert_eq!(resolve_plain(text), Scalar::Int(expected));
}

#[test]
fn resolves_floats() {
    assert_eq!(resolve_plain("1.5"), Scalar::Float(1.5));
    assert_eq!(resolve_plain("-2e3"), Scalar::Float(-2000.0));
    assert_eq!(resolve_plain(".inf"), Scalar::Float(f64::INFINITY));
    assert!(matches!(resolve_plain(".nan"), Scalar::Float(f) if f.is_nan()));
}

#[parameterized(
    word = { "hello" },
    yes = { "yes" },
    rust_inf = { "inf" },
    rust_nan = { "nan" },
    version = { "1.2.3" },
    path = { "/login" },
)]
fn keeps_strings(text: &str) {
    assert_eq!(resolve_plain(text), Scalar::String(text.to_string()));
}

#[test]
fn resolves_special_floats() {
    assert_eq!(resolve_plain("+.inf"), Scalar::Float(f64::INFINITY));
    assert_eq!(resolve_plain("-.Inf"), Scalar::Float(f64::NEG_INFINITY));
    assert!(matches!(resolve_plain(".NaN"), Scalar::Float(f) if f.is_nan()));
    assert_eq!(resolve_plain("infinity"), Scalar::String("infinity".to_string()));
}

#[parameterized(
    str_int = { "str", "123", Scalar::String("123".to_string()) },
    str_bool = { "str", "true", Scalar::String("true".to_string()) },
    str_null = { "str", "~", Scalar::String("~".to_string()) },
    int = { "int", "7", Scalar::Int(7) },
    int_hex = { "int", "0x10", Scalar::Int(16) },
    float_from_int = { "float", "2", Scalar::Float(2.0) },
    bool = { "bool", "false", Scalar::Bool(false) },
    null = { "null", "null", Scalar::Null },
    timestamp = { "timestamp", "2001-12-14", Scalar::String("2001-12-14".to_string()) },
)]
fn resolves_tagged(suffix: &str, text: &str, expected: Scalar) {
    assert_eq!(resolve_tagged(suffix, text), Some(expected));
}

#[parameterized(
    int_word = { "int", "seven" },
    int_float = { "int", "1.5" },
    bool_word = { "bool", "yes" },
    null_word = { "null", "none" },
    float_word = { "float", "x" },
)]
fn rejects_mistagged(suffix: &str, text: &str) {
    assert_eq!(resolve_tagged(suffix, text), None);
}
