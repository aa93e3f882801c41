// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::setting::InlineSetting;

type TestScenario = Scenario<&'static str, u32>;

fn scenario(name: Option<&str>, parent: Option<&Arc<TestScenario>>) -> Arc<TestScenario> {
    let setting: Arc<dyn Setting> = match name {
        Some(name) => Arc::new(InlineSetting::named(name, "")),
        None => Arc::new(InlineSetting::new("")),
    };
    Arc::new(Scenario::new(setting, "header", vec![1, 2, 3], parent))
}

#[test]
fn exposes_its_parts() {
    let s = scenario(Some("a.yaml"), None);

    assert_eq!(s.filename(), Some("a.yaml"));
    assert_eq!(s.setting().filename(), Some("a.yaml"));
    assert_eq!(*s.header(), "header");
    assert_eq!(s.actions(), &[1, 2, 3]);
    assert!(s.parent().is_none());
    assert!(!s.has_parent());
}

#[test]
fn ancestors_walk_nearest_first() {
    let root = scenario(Some("root.yaml"), None);
    let mid = scenario(None, Some(&root));
    let leaf = scenario(Some("leaf.yaml"), Some(&mid));

    let names: Vec<_> = leaf
        .ancestors()
        .map(|s| s.filename().map(str::to_string))
        .collect();
    assert_eq!(names, vec![None, Some("root.yaml".to_string())]);
}

#[test]
fn parent_link_does_not_keep_parent_alive() {
    let parent = scenario(Some("parent.yaml"), None);
    let child = scenario(Some("child.yaml"), Some(&parent));
    assert!(child.parent().is_some());

    drop(parent);

    assert!(child.has_parent());
    assert!(child.parent().is_none());
    assert_eq!(child.ancestors().count(), 0);
}
