// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Header/actions shape normalization
//!
//! Two authoring conventions are accepted:
//!
//! ```yaml
//! # multi-document: header, then a sequence of actions
//! description: login
//! ---
//! - open: /login
//! ```
//!
//! ```yaml
//! # single document: one sequence, header first
//! - description: login
//! - open: /login
//! ```

use scn_document::Node;
use thiserror::Error;

/// The parsed documents do not have a header/actions shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("document stream is empty")]
    EmptyStream,

    #[error("a single-document scenario must be a sequence of header and actions, found {found}")]
    NotASequence {
        found: &'static str,
        line: Option<usize>,
    },

    #[error("a single-document scenario must start with a header, found an empty sequence")]
    EmptySequence,
}

impl ShapeError {
    pub fn line(&self) -> Option<usize> {
        match self {
            ShapeError::NotASequence { line, .. } => *line,
            _ => None,
        }
    }
}

/// Split parsed documents into the raw header and raw actions.
///
/// With two or more documents the first is the header and the second, only
/// if it is a sequence, holds the actions; later documents are ignored. A
/// single document must be a sequence whose first item is the header.
pub fn normalize(documents: &[Node]) -> Result<(&Node, &[Node]), ShapeError> {
    match documents {
        [] => Err(ShapeError::EmptyStream),
        [single] => match single {
            Node::Sequence(items) => match items.split_first() {
                Some((header, actions)) => Ok((header, actions)),
                None => Err(ShapeError::EmptySequence),
            },
            other => Err(ShapeError::NotASequence {
                found: other.type_name(),
                line: other.line(),
            }),
        },
        [header, actions, ..] => Ok((header, actions.as_sequence().unwrap_or(&[]))),
    }
}

#[cfg(test)]
#[path = "shape_tests.rs"]
mod tests;
