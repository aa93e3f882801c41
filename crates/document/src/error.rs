// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document parsing errors

use thiserror::Error;
use yaml_rust2::ScanError;

/// Errors raised while turning parser events into nodes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("mapping keys must be scalars, found {found} at line {line}")]
    NonScalarKey { found: &'static str, line: usize },

    #[error("alias refers to unknown anchor at line {line}")]
    UnknownAnchor { line: usize },

    #[error("cannot read {value:?} as {tag} at line {line}")]
    InvalidTaggedScalar {
        tag: String,
        value: String,
        line: usize,
    },

    #[error("aliases expand to more than {limit} nodes at line {line}")]
    AliasExpansion { limit: usize, line: usize },
}

impl ComposeError {
    pub fn line(&self) -> usize {
        match self {
            ComposeError::NonScalarKey { line, .. }
            | ComposeError::UnknownAnchor { line }
            | ComposeError::InvalidTaggedScalar { line, .. }
            | ComposeError::AliasExpansion { line, .. } => *line,
        }
    }
}

/// Errors that can occur while parsing a document stream
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML syntax error from the scanner/parser
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// Structurally valid YAML we cannot represent
    #[error("{0}")]
    Compose(#[from] ComposeError),
}

impl ParseError {
    /// Name of the underlying error type, used as a failure tag
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Scan(_) => "ScanError",
            ParseError::Compose(_) => "ComposeError",
        }
    }

    /// Best-effort 1-based source line of the failure
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Scan(e) => Some(e.marker().line()),
            ParseError::Compose(e) => Some(e.line()),
        }
    }
}
