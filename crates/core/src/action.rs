// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action factories

use scn_document::Node;
use std::convert::Infallible;

/// Turns raw action nodes into action objects
///
/// Called once per raw action, in document order. Errors are handed back to
/// the caller of the loader unchanged.
pub trait ActionFactory {
    type Action;
    type Error: std::error::Error + Send + Sync + 'static;

    fn create_action(&self, raw: &Node) -> Result<Self::Action, Self::Error>;
}

/// Keeps raw action nodes as they are
#[derive(Debug, Clone, Copy, Default)]
pub struct RawActions;

impl ActionFactory for RawActions {
    type Action = Node;
    type Error = Infallible;

    fn create_action(&self, raw: &Node) -> Result<Node, Infallible> {
        Ok(raw.clone())
    }
}
