// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `scn show` - Print a loaded scenario tree

use crate::action::Action;
use crate::config::Config;
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use crate::setting;
use crate::tree::{ScenarioTree, TreeLoader};
use clap::Args;
use scn_core::{Mapping, Node};
use serde::Serialize;
use std::fmt;
use std::process::ExitCode;

#[derive(Args)]
pub struct ShowArgs {
    /// Scenario file (`-` reads stdin)
    pub file: String,

    /// Output format (defaults to `output.format` from scn.toml)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Serialize)]
pub struct ActionView<'a> {
    #[serde(flatten)]
    pub action: &'a Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<ScenarioView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ScenarioView<'a> {
    pub filename: Option<&'a str>,
    pub description: &'a str,
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "no_fields")]
    pub header: &'a Mapping,
    pub actions: Vec<ActionView<'a>>,
}

impl<'a> ScenarioView<'a> {
    pub fn new(tree: &'a ScenarioTree) -> Self {
        let scenario = &tree.scenario;
        let header = scenario.header();
        Self {
            filename: scenario.filename(),
            description: &header.description,
            line: header.line,
            header: &header.fields,
            actions: scenario
                .actions()
                .iter()
                .enumerate()
                .map(|(i, action)| ActionView {
                    action,
                    scenario: tree.include_at(i).map(ScenarioView::new),
                })
                .collect(),
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        write!(
            f,
            "{}{}: {}",
            pad,
            self.filename.unwrap_or("<stdin>"),
            self.description
        )?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        writeln!(f)?;

        for view in &self.actions {
            let action = view.action;
            match action.line {
                Some(line) => write!(f, "{}  {:>4}: {}", pad, line, action.kind)?,
                None => write!(f, "{}     -: {}", pad, action.kind)?,
            }
            if !action.value.is_null() && action.include.is_none() {
                write!(f, " {}", compact(&action.value))?;
            }
            if let Some(target) = &action.include {
                write!(f, " -> {}", target)?;
            }
            writeln!(f)?;
            if let Some(child) = &view.scenario {
                child.write_indented(f, depth + 2)?;
            }
        }
        Ok(())
    }
}

fn no_fields(mapping: &&Mapping) -> bool {
    mapping.fields().next().is_none()
}

/// Scalars print bare, collections in flow style
fn compact(node: &Node) -> String {
    match node.as_str() {
        Some(s) => s.to_string(),
        None => node.to_string(),
    }
}

impl fmt::Display for ScenarioView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

pub fn show(args: ShowArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let format = args.format.unwrap_or(config.output.format);
    let loader = TreeLoader::new(&config.include);
    let setting = setting::open(&args.file)?;

    match loader.load(setting) {
        Ok(tree) => {
            let view = ScenarioView::new(&tree);
            match format {
                // Display already ends with a newline
                OutputFormat::Text => print!("{}", view),
                OutputFormat::Json => output::print(&view, format)?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprint!("{}", CliError::from_tree_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
