// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for include resolution and `scn.toml`

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::Project;
use predicates::prelude::*;

#[test]
fn test_check_counts_included_scenarios() {
    let project = Project::new();
    project
        .file(
            "main.yaml",
            "- description: main\n- include: a.yaml\n- include: sub/b.yaml\n",
        )
        .file("a.yaml", "- description: a\n- wait\n")
        .file("sub/b.yaml", "- description: b\n- include: ../a.yaml\n");

    project
        .scn()
        .args(["check", "main.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ok main.yaml (2 actions, 3 included scenarios)",
        ));
}

#[test]
fn test_check_detects_include_cycle() {
    let project = Project::new();
    project
        .file("a.yaml", "- description: a\n- include: b.yaml\n")
        .file("b.yaml", "- description: b\n- include: a.yaml\n");

    project
        .scn()
        .args(["check", "a.yaml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAILED a.yaml (CircularReference)"))
        .stderr(predicate::str::contains("circular reference detected: ["))
        .stderr(predicate::str::contains("Remove the include"));
}

#[test]
fn test_config_disables_following() {
    let project = Project::new();
    project
        .file("scn.toml", "[include]\nfollow = false\n")
        .file("main.yaml", "- description: main\n- include: missing.yaml\n");

    project
        .scn()
        .args(["check", "main.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok main.yaml (1 actions)"));
}

#[test]
fn test_config_include_key() {
    let project = Project::new();
    project
        .file("scn.toml", "[include]\nkey = \"use\"\n")
        .file("main.yaml", "- description: main\n- use: a.yaml\n")
        .file("a.yaml", "- description: a\n- wait\n");

    project
        .scn()
        .args(["check", "main.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 included scenarios"));
}

#[test]
fn test_config_output_format() {
    let project = Project::new();
    project
        .file("scn.toml", "[output]\nformat = \"json\"\n")
        .file("main.yaml", "- description: main\n");

    project
        .scn()
        .args(["check", "main.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ok\": true"));
}

#[test]
fn test_explicit_config_must_exist() {
    let project = Project::new();
    project.file("main.yaml", "- description: main\n");

    project
        .scn()
        .args(["--config", "other.toml", "check", "main.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error reading other.toml"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let project = Project::new();
    project
        .file("scn.toml", "[output]\nformat = \"xml\"\n")
        .file("main.yaml", "- description: main\n");

    project
        .scn()
        .args(["check", "main.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config scn.toml"));
}

#[test]
fn test_log_file() {
    let project = Project::new();
    project
        .file("scn.toml", "[log]\nlevel = \"debug\"\nfile = \"logs/scn.log\"\n")
        .file("main.yaml", "- description: main\n");

    project
        .scn()
        .args(["check", "main.yaml"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let log = std::fs::read_to_string(project.path().join("logs/scn.log")).unwrap();
    assert!(log.contains("scenario.load"), "{}", log);
}

#[test]
fn test_action_failure_in_include_names_the_file() {
    let project = Project::new();
    project
        .file("main.yaml", "- description: main\n- include: steps/bad.yaml\n")
        .file("steps/bad.yaml", "- description: bad\n- 42\n");

    let output = project
        .scn()
        .args(["check", "main.yaml", "--format", "json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let error = &reports[0]["error"];
    assert_eq!(error["kind"], "ActionError");
    assert!(
        error["filename"].as_str().unwrap().ends_with("bad.yaml"),
        "{}",
        error
    );

    project
        .scn()
        .args(["check", "main.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::is_match(r"-> file: \S*steps/bad\.yaml").unwrap());
}
