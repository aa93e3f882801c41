// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario load errors

use crate::cycle::CycleError;
use crate::header::BoxError;
use crate::shape::ShapeError;
use scn_document::ParseError;
use std::fmt;
use thiserror::Error;

/// Failure category of a [`LoadError`]
///
/// Except for `CircularReference`, each kind is named after the error type
/// that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
    /// A filename reappeared in the parent chain
    CircularReference,
    /// The setting could not be read
    Io,
    /// YAML syntax error
    Scan,
    /// YAML that cannot be represented as a node tree
    Compose,
    /// The documents do not have a header/actions shape
    Shape,
    /// The header could not be built from the first element
    Header,
}

impl LoadErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadErrorKind::CircularReference => "CircularReference",
            LoadErrorKind::Io => "IoError",
            LoadErrorKind::Scan => "ScanError",
            LoadErrorKind::Compose => "ComposeError",
            LoadErrorKind::Shape => "ShapeError",
            LoadErrorKind::Header => "HeaderError",
        }
    }
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scenario could not be loaded
#[derive(Debug, Error)]
#[error("{}: {kind}: {message}", .filename.as_deref().unwrap_or("<inline>"))]
pub struct LoadError {
    /// Filename of the setting being loaded, if it has one
    pub filename: Option<String>,
    pub kind: LoadErrorKind,
    /// Human-readable description
    pub message: String,
    /// Best-effort 1-based source line
    pub line: Option<usize>,
    #[source]
    source: Option<BoxError>,
}

impl LoadError {
    pub fn new(filename: Option<&str>, kind: LoadErrorKind, message: impl Into<String>) -> Self {
        Self {
            filename: filename.map(str::to_string),
            kind,
            message: message.into(),
            line: None,
            source: None,
        }
    }

    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub(crate) fn with_boxed_source(mut self, source: BoxError) -> Self {
        self.source = Some(source);
        self
    }

    pub(crate) fn circular(filename: &str, cycle: CycleError) -> Self {
        Self::new(
            Some(filename),
            LoadErrorKind::CircularReference,
            cycle.to_string(),
        )
        .with_source(cycle)
    }

    pub(crate) fn io(filename: Option<&str>, e: std::io::Error) -> Self {
        Self::new(filename, LoadErrorKind::Io, e.to_string()).with_source(e)
    }

    pub(crate) fn parse(filename: Option<&str>, e: ParseError) -> Self {
        let kind = match e {
            ParseError::Scan(_) => LoadErrorKind::Scan,
            ParseError::Compose(_) => LoadErrorKind::Compose,
        };
        Self::new(filename, kind, e.to_string())
            .with_line(e.line())
            .with_source(e)
    }

    pub(crate) fn shape(filename: Option<&str>, e: ShapeError) -> Self {
        Self::new(filename, LoadErrorKind::Shape, e.to_string())
            .with_line(e.line())
            .with_source(e)
    }

    /// Failure tag, e.g. `CircularReference` or `ShapeError`
    pub fn kind_name(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// Error returned by [`crate::ScenarioLoader::load`]
///
/// Action factory failures are passed through untouched; everything else is
/// a [`LoadError`].
#[derive(Debug, Error)]
pub enum ScenarioError<E> {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Action(E),
}

impl<E> ScenarioError<E> {
    pub fn as_load_error(&self) -> Option<&LoadError> {
        match self {
            ScenarioError::Load(e) => Some(e),
            ScenarioError::Action(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
