// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario trees: a scenario plus the scenarios it includes
//!
//! Each included scenario is loaded with its includer as parent, so the
//! loader's cycle detection stops `a.yaml → b.yaml → a.yaml`.

use crate::action::{Action, ActionError, CliActions};
use crate::config::IncludeConfig;
use crate::setting::{base_dir, FileSetting};
use scn_core::{
    LoadError, Scenario, ScenarioError, ScenarioHeader, ScenarioLoader, Setting, TracedSetting,
};
use std::sync::Arc;
use thiserror::Error;

pub type CliScenario = Scenario<ScenarioHeader, Action>;

/// A scenario in the tree failed to load
#[derive(Debug, Error)]
pub enum TreeError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{}: {source}", .filename.as_deref().unwrap_or("<stdin>"))]
    Action {
        /// File holding the bad action
        filename: Option<String>,
        #[source]
        source: ActionError,
    },
}

#[derive(Debug)]
pub struct ScenarioTree {
    pub scenario: Arc<CliScenario>,
    /// Included scenarios, keyed by the index of their include action
    pub includes: Vec<(usize, ScenarioTree)>,
}

impl ScenarioTree {
    /// The tree loaded for the include action at `index`, if any
    pub fn include_at(&self, index: usize) -> Option<&ScenarioTree> {
        self.includes
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, tree)| tree)
    }

    /// Number of scenarios in the tree, this one included
    pub fn scenario_count(&self) -> usize {
        1 + self
            .includes
            .iter()
            .map(|(_, tree)| tree.scenario_count())
            .sum::<usize>()
    }
}

pub struct TreeLoader {
    loader: ScenarioLoader<CliActions>,
    follow: bool,
}

impl TreeLoader {
    pub fn new(config: &IncludeConfig) -> Self {
        Self {
            loader: ScenarioLoader::new(CliActions::new(&config.key)),
            follow: config.follow,
        }
    }

    pub fn load(&self, setting: Arc<dyn Setting>) -> Result<ScenarioTree, TreeError> {
        self.load_with_parent(setting, None)
    }

    fn load_with_parent(
        &self,
        setting: Arc<dyn Setting>,
        parent: Option<&Arc<CliScenario>>,
    ) -> Result<ScenarioTree, TreeError> {
        let scenario = self
            .loader
            .load(Arc::clone(&setting), parent)
            .map_err(|e| match e {
                ScenarioError::Load(e) => TreeError::Load(e),
                ScenarioError::Action(source) => TreeError::Action {
                    filename: setting.filename().map(str::to_string),
                    source,
                },
            })?;
        let mut includes = Vec::new();

        if self.follow {
            let base = base_dir(scenario.setting().as_ref());
            for (index, action) in scenario.actions().iter().enumerate() {
                let Some(target) = &action.include else {
                    continue;
                };
                tracing::debug!(
                    from = scenario.filename().unwrap_or("<stdin>"),
                    target = %target,
                    "following include"
                );
                let child: Arc<dyn Setting> =
                    Arc::new(TracedSetting::new(FileSetting::new(base.join(target))));
                includes.push((index, self.load_with_parent(child, Some(&scenario))?));
            }
        }

        Ok(ScenarioTree { scenario, includes })
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
