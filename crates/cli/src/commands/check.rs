// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `scn check` - Load scenarios and report failures

use crate::config::Config;
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use crate::setting;
use crate::tree::{ScenarioTree, TreeError, TreeLoader};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::process::ExitCode;

#[derive(Args)]
pub struct CheckArgs {
    /// Scenario files to check (`-` reads stdin)
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Output format (defaults to `output.format` from scn.toml)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Where a failed check went wrong
#[derive(Debug, Serialize)]
pub struct Failure {
    pub kind: String,
    pub filename: Option<String>,
    pub line: Option<usize>,
    pub message: String,
}

impl Failure {
    fn from_error(e: &TreeError) -> Self {
        match e {
            TreeError::Load(e) => Self {
                kind: e.kind.to_string(),
                filename: e.filename.clone(),
                line: e.line,
                message: e.message.clone(),
            },
            TreeError::Action { filename, source } => Self {
                kind: "ActionError".to_string(),
                filename: filename.clone(),
                line: source.line(),
                message: source.to_string(),
            },
        }
    }
}

/// Outcome of checking one file
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub file: String,
    pub ok: bool,
    pub actions: usize,
    pub scenarios: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Failure>,
}

impl CheckReport {
    fn passed(file: &str, tree: &ScenarioTree) -> Self {
        Self {
            file: file.to_string(),
            ok: true,
            actions: tree.scenario.actions().len(),
            scenarios: tree.scenario_count(),
            error: None,
        }
    }

    fn failed(file: &str, e: &TreeError) -> Self {
        Self {
            file: file.to_string(),
            ok: false,
            actions: 0,
            scenarios: 0,
            error: Some(Failure::from_error(e)),
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None if self.scenarios > 1 => write!(
                f,
                "ok {} ({} actions, {} included scenarios)",
                self.file,
                self.actions,
                self.scenarios - 1
            ),
            None => write!(f, "ok {} ({} actions)", self.file, self.actions),
            Some(e) => write!(f, "FAILED {} ({})", self.file, e.kind),
        }
    }
}

pub fn check(args: CheckArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let format = args.format.unwrap_or(config.output.format);
    let loader = TreeLoader::new(&config.include);
    let mut reports = Vec::with_capacity(args.files.len());

    for file in &args.files {
        let setting = setting::open(file)?;
        let report = match loader.load(setting) {
            Ok(tree) => CheckReport::passed(file, &tree),
            Err(e) => {
                if format == OutputFormat::Text {
                    eprint!("{}", CliError::from_tree_error(&e));
                }
                CheckReport::failed(file, &e)
            }
        };
        tracing::info!(file = %file, ok = report.ok, "checked");
        reports.push(report);
    }

    output::print_list(&reports, format)?;

    if reports.iter().all(|r| r.ok) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
