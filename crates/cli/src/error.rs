// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Load failures are rendered with:
//! - What went wrong (message)
//! - Where it happened (file, kind, line)
//! - How to fix it (suggestions)

use crate::action::ActionError;
use crate::tree::TreeError;
use scn_core::{LoadError, LoadErrorKind};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Where it happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add context about where this error happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Render a scenario load failure.
    pub fn from_load_error(e: &LoadError) -> Self {
        let mut err = CliError::new(e.message.clone())
            .with_context(format!(
                "file: {}",
                e.filename.as_deref().unwrap_or("<stdin>")
            ))
            .with_context(format!("kind: {}", e.kind));
        if let Some(line) = e.line {
            err = err.with_context(format!("line: {}", line));
        }

        match e.kind {
            LoadErrorKind::CircularReference => err
                .with_suggestion("Remove the include that points back to an ancestor scenario"),
            LoadErrorKind::Io => err.with_suggestion("Check that the file exists and is readable"),
            LoadErrorKind::Scan | LoadErrorKind::Compose => {
                err.with_suggestion("Fix the YAML syntax at the reported line")
            }
            LoadErrorKind::Shape => err
                .with_suggestion("Write a single sequence whose first item is the header")
                .with_suggestion(
                    "Or put the header in its own document, then `---` and a sequence of actions",
                ),
            LoadErrorKind::Header => {
                err.with_suggestion("Add a `description:` to the first element/document")
            }
        }
    }

    /// Render an action that could not be created.
    pub fn from_action_error(filename: Option<&str>, e: &ActionError) -> Self {
        let mut err = CliError::new(e.to_string())
            .with_context(format!("file: {}", filename.unwrap_or("<stdin>")));
        if let Some(line) = e.line() {
            err = err.with_context(format!("line: {}", line));
        }
        err.with_suggestion("Write each action as `- name: value` or as a bare `- name`")
    }

    pub fn from_tree_error(e: &TreeError) -> Self {
        match e {
            TreeError::Load(e) => Self::from_load_error(e),
            TreeError::Action { filename, source } => {
                Self::from_action_error(filename.as_deref(), source)
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {}
