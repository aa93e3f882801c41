// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::config::IncludeConfig;
use scn_core::{InlineSetting, Setting};
use similar_asserts::assert_eq;
use std::sync::Arc;

fn tree(text: &str) -> ScenarioTree {
    let setting: Arc<dyn Setting> = Arc::new(InlineSetting::new(text));
    TreeLoader::new(&IncludeConfig::default())
        .load(setting)
        .unwrap()
}

#[test]
fn text_view() {
    let tree = tree(
        "\
- description: checkout
  owner: qa
- open: /cart
- wait
- fill: {card: '4242'}
  slow: true
",
    );

    assert_eq!(
        ScenarioView::new(&tree).to_string(),
        "\
<stdin>: checkout (line 1)
     3: open /cart
     -: wait
     5: fill {card: \"4242\", __line__: 5}
"
    );
}

#[test]
fn json_view_skips_empty_parts() {
    let tree = tree("description: bare\n---\n- wait\n");
    let json = serde_json::to_value(ScenarioView::new(&tree)).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "filename": null,
            "description": "bare",
            "line": 1,
            "actions": [{"kind": "wait", "line": null, "value": null}],
        })
    );
}
