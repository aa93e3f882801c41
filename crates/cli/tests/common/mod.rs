// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A scratch directory holding scenario files and, optionally, `scn.toml`.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `name`, creating parent directories.
    pub fn file(&self, name: &str, content: &str) -> &Self {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// `scn` running inside the project directory, with `RUST_LOG` cleared
    pub fn scn(&self) -> Command {
        let mut cmd = Command::cargo_bin("scn").expect("scn binary not built");
        cmd.current_dir(self.dir.path()).env_remove("RUST_LOG");
        cmd
    }
}
