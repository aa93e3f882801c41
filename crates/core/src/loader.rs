// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario loading
//!
//! ```text
//! setting → cycle check → read → parse_documents → normalize → Header → ActionFactory → Scenario
//! ```
//!
//! # Example
//!
//! ```ignore
//! use scn_core::{InlineSetting, RawActions, ScenarioHeader, ScenarioLoader};
//!
//! let loader = ScenarioLoader::new(RawActions);
//! let setting = Arc::new(InlineSetting::named("login.yaml", "- description: login\n- open: /\n"));
//! let scenario = loader.load::<ScenarioHeader>(setting, None)?;
//! ```

use crate::action::ActionFactory;
use crate::cycle::check_no_cycle;
use crate::error::{LoadError, LoadErrorKind, ScenarioError};
use crate::header::Header;
use crate::scenario::Scenario;
use crate::setting::Setting;
use crate::shape::normalize;
use scn_document::{parse_documents, Node};
use std::sync::Arc;

/// Loads scenarios, converting actions with `F`
#[derive(Debug, Clone, Default)]
pub struct ScenarioLoader<F> {
    factory: F,
}

impl<F: ActionFactory> ScenarioLoader<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Load a scenario from `setting`, chained to `parent`.
    ///
    /// Cycle detection runs only when the setting has a filename and a
    /// parent is given. Parse, shape and header failures come back as
    /// [`LoadError`]; action factory failures as [`ScenarioError::Action`].
    pub fn load<H: Header>(
        &self,
        setting: Arc<dyn Setting>,
        parent: Option<&Arc<Scenario<H, F::Action>>>,
    ) -> Result<Arc<Scenario<H, F::Action>>, ScenarioError<F::Error>> {
        let filename = setting.filename();
        let span = tracing::debug_span!("scenario.load", filename = filename.unwrap_or("<inline>"));
        let _guard = span.enter();

        let result = self.load_inner(&setting, parent);
        match &result {
            Ok(scenario) => tracing::debug!(
                actions = scenario.actions().len(),
                has_parent = scenario.has_parent(),
                "loaded"
            ),
            Err(ScenarioError::Load(e)) => tracing::warn!(
                kind = e.kind_name(),
                line = e.line,
                error = %e.message,
                "load failed"
            ),
            Err(ScenarioError::Action(e)) => {
                tracing::warn!(error = %e, "action creation failed")
            }
        }

        result
    }

    fn load_inner<H: Header>(
        &self,
        setting: &Arc<dyn Setting>,
        parent: Option<&Arc<Scenario<H, F::Action>>>,
    ) -> Result<Arc<Scenario<H, F::Action>>, ScenarioError<F::Error>> {
        let filename = setting.filename();

        if let (Some(name), Some(parent)) = (filename, parent) {
            check_no_cycle(name, parent).map_err(|e| LoadError::circular(name, e))?;
        }

        let text = setting.read().map_err(|e| LoadError::io(filename, e))?;
        let (header, raw_actions) = parse_scenario::<H>(&text).map_err(|mut e| {
            e.filename = filename.map(str::to_string);
            e
        })?;
        let actions = self.create_actions(&raw_actions)?;

        Ok(Arc::new(Scenario::new(
            Arc::clone(setting),
            header,
            actions,
            parent,
        )))
    }

    /// Convert raw actions in order, stopping at the first failure
    pub fn create_actions(&self, raw: &[Node]) -> Result<Vec<F::Action>, ScenarioError<F::Error>> {
        raw.iter()
            .map(|action| {
                self.factory
                    .create_action(action)
                    .map_err(ScenarioError::Action)
            })
            .collect()
    }
}

/// Parse scenario text into its header and raw actions.
///
/// The returned error has no filename; [`ScenarioLoader::load`] fills it in.
pub fn parse_scenario<H: Header>(text: &str) -> Result<(H, Vec<Node>), LoadError> {
    let documents = parse_documents(text).map_err(|e| LoadError::parse(None, e))?;
    let (raw_header, raw_actions) = normalize(&documents).map_err(|e| LoadError::shape(None, e))?;
    tracing::debug!(
        documents = documents.len(),
        actions = raw_actions.len(),
        header_line = raw_header.line(),
        "normalized"
    );

    let header = H::from_raw(raw_header).map_err(|e| {
        let content = Node::Sequence(documents.clone());
        LoadError::new(
            None,
            LoadErrorKind::Header,
            format!(
                "scenario should have a description at first element/document: {}",
                content
            ),
        )
        .with_line(raw_header.line())
        .with_boxed_source(e)
    })?;

    Ok((header, raw_actions.to_vec()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
