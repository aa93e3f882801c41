// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario actions as the CLI understands them
//!
//! An action is named by its first key (`- open: /login`) or is a bare name
//! (`- wait`). Any remaining keys are options. Actions are never executed
//! here; the only one with meaning is the include action, which names a
//! child scenario file.

use scn_core::{ActionFactory, Mapping, Node};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("action at line {line} has no name")]
    Unnamed { line: usize },

    #[error("action must be a mapping or a name, found {found}")]
    Unrecognized { found: &'static str },

    #[error("include at line {line} must name a file, found {found}")]
    InvalidInclude { line: usize, found: &'static str },
}

impl ActionError {
    pub fn line(&self) -> Option<usize> {
        match self {
            ActionError::Unnamed { line } | ActionError::InvalidInclude { line, .. } => Some(*line),
            ActionError::Unrecognized { .. } => None,
        }
    }
}

/// One step of a scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub kind: String,
    pub line: Option<usize>,
    pub value: Node,
    #[serde(skip_serializing_if = "Mapping::is_empty")]
    pub options: Mapping,
    /// Child scenario named by an include action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

/// Builds [`Action`]s, recognizing includes by `include_key`
#[derive(Debug, Clone)]
pub struct CliActions {
    include_key: String,
}

impl CliActions {
    pub fn new(include_key: impl Into<String>) -> Self {
        Self {
            include_key: include_key.into(),
        }
    }
}

impl ActionFactory for CliActions {
    type Action = Action;
    type Error = ActionError;

    fn create_action(&self, raw: &Node) -> Result<Action, ActionError> {
        let mut action = match raw {
            Node::Mapping(mapping) => {
                let line = mapping.line();
                let mut fields = mapping.fields();
                let (kind, value) = fields.next().ok_or(ActionError::Unnamed {
                    line: line.unwrap_or_default(),
                })?;
                Action {
                    kind: kind.to_string(),
                    line,
                    value: value.clone(),
                    options: fields.map(|(k, v)| (k.to_string(), v.clone())).collect(),
                    include: None,
                }
            }
            Node::Scalar(scn_core::Scalar::String(name)) => Action {
                kind: name.clone(),
                line: None,
                value: Node::null(),
                options: Mapping::new(),
                include: None,
            },
            other => {
                return Err(ActionError::Unrecognized {
                    found: other.type_name(),
                })
            }
        };

        if action.kind == self.include_key {
            let target = action.value.as_str().ok_or(ActionError::InvalidInclude {
                line: action.line.unwrap_or_default(),
                found: action.value.type_name(),
            })?;
            action.include = Some(target.to_string());
        }

        Ok(action)
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
