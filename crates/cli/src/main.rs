// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scn - Scenario loader CLI

mod action;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod setting;
mod tree;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, show};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "scn", version, about = "Load and validate YAML scenarios")]
struct Cli {
    /// Config file (defaults to ./scn.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level, overriding the configured level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load scenario files and report any failure
    Check(check::CheckArgs),
    /// Print a scenario with its actions and included scenarios
    Show(show::ShowArgs),
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.verbose {
        config.log.level = "debug".to_string();
    }
    let _guard = logging::setup_logging(&config.log)?;

    match cli.command {
        Commands::Check(args) => check::check(args, &config),
        Commands::Show(args) => show::show(args, &config),
    }
}
