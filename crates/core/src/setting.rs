// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loadable text resources

use std::fmt;

/// An already-resolved text resource a scenario is loaded from.
///
/// The loader only ever calls [`Setting::read`] once per load and never
/// writes back. Settings without a filename (inline text, stdin) take no
/// part in cycle detection.
pub trait Setting: fmt::Debug + Send + Sync {
    /// Stable name of the resource, if it has one
    fn filename(&self) -> Option<&str>;

    /// Read the full text of the resource
    fn read(&self) -> std::io::Result<String>;
}

/// A setting backed by text held in memory
#[derive(Debug, Clone)]
pub struct InlineSetting {
    filename: Option<String>,
    content: String,
}

impl InlineSetting {
    /// Anonymous inline text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            filename: None,
            content: content.into(),
        }
    }

    /// Inline text that behaves as if it came from `filename`
    pub fn named(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            content: content.into(),
        }
    }
}

impl Setting for InlineSetting {
    fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    fn read(&self) -> std::io::Result<String> {
        Ok(self.content.clone())
    }
}
