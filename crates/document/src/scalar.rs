// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scalar resolution (YAML 1.2 core schema)
//!
//! Untagged plain scalars go through [`Yaml::from_str`]. Scalars tagged with
//! a `tag:yaml.org,2002:` suffix (`!!str`, `!!int`, ...) are read as that
//! type, whatever their quoting.

use crate::node::Scalar;
use yaml_rust2::Yaml;

/// Handle that `!!` expands to
pub const CORE_TAG_HANDLE: &str = "tag:yaml.org,2002:";

/// Resolve an unquoted, untagged scalar into its typed value
pub fn resolve_plain(text: &str) -> Scalar {
    match text {
        "" | "Null" | "NULL" => Scalar::Null,
        "True" | "TRUE" => Scalar::Bool(true),
        "False" | "FALSE" => Scalar::Bool(false),
        ".nan" | ".NaN" | ".NAN" => Scalar::Float(f64::NAN),
        _ => from_yaml(Yaml::from_str(text), text),
    }
}

/// Resolve a scalar tagged `!!<suffix>`.
///
/// Returns `None` when the text is not a valid value of the tagged type.
/// Suffixes outside `str`, `null`, `bool`, `int` and `float` read as strings.
pub fn resolve_tagged(suffix: &str, text: &str) -> Option<Scalar> {
    let plain = || resolve_plain(text);
    match suffix {
        "null" => matches!(plain(), Scalar::Null).then_some(Scalar::Null),
        "bool" => match plain() {
            Scalar::Bool(b) => Some(Scalar::Bool(b)),
            _ => None,
        },
        "int" => match plain() {
            Scalar::Int(i) => Some(Scalar::Int(i)),
            _ => None,
        },
        "float" => match plain() {
            Scalar::Float(f) => Some(Scalar::Float(f)),
            Scalar::Int(i) => Some(Scalar::Float(i as f64)),
            _ => None,
        },
        _ => Some(Scalar::String(text.to_string())),
    }
}

fn from_yaml(yaml: Yaml, text: &str) -> Scalar {
    match yaml {
        Yaml::Null => Scalar::Null,
        Yaml::Boolean(b) => Scalar::Bool(b),
        Yaml::Integer(i) => Scalar::Int(i),
        Yaml::Real(_) if is_float_spelling(text) => match yaml.as_f64() {
            Some(f) => Scalar::Float(f),
            None => Scalar::String(text.to_string()),
        },
        Yaml::String(s) => Scalar::String(s),
        _ => Scalar::String(text.to_string()),
    }
}

/// `str::parse::<f64>` also takes `inf`, `nan` and `infinity`; YAML only
/// spells the special values with a leading dot
fn is_float_spelling(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit()) || text.trim_start_matches(['+', '-']).starts_with('.')
}

#[cfg(test)]
#[path = "scalar_tests.rs"]
mod tests;
