// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario headers

use scn_document::{Mapping, Node};
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Built from the first logical element of a scenario
pub trait Header: Sized {
    fn from_raw(raw: &Node) -> Result<Self, BoxError>;
}

/// Accepts any first element as-is
impl Header for Node {
    fn from_raw(raw: &Node) -> Result<Self, BoxError> {
        Ok(raw.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("header must be a mapping, found {0}")]
    NotAMapping(&'static str),

    #[error("header has no description")]
    MissingDescription,

    #[error("header description must be a string, found {0}")]
    InvalidDescription(&'static str),
}

/// Header carrying a mandatory `description`
///
/// Other fields are kept untouched for whoever interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioHeader {
    pub description: String,
    pub line: Option<usize>,
    pub fields: Mapping,
}

impl ScenarioHeader {
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.fields.get(key)
    }
}

impl Header for ScenarioHeader {
    fn from_raw(raw: &Node) -> Result<Self, BoxError> {
        let mapping = raw
            .as_mapping()
            .ok_or(HeaderError::NotAMapping(raw.type_name()))?;
        let description = match mapping.get("description") {
            Some(Node::Scalar(scn_document::Scalar::String(s))) => s.clone(),
            Some(other) => return Err(HeaderError::InvalidDescription(other.type_name()).into()),
            None => return Err(HeaderError::MissingDescription.into()),
        };

        Ok(Self {
            description,
            line: mapping.line(),
            fields: mapping
                .fields()
                .filter(|(k, _)| *k != "description")
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        })
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
