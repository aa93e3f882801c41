// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parent-chain cycle detection
//!
//! A scenario about to be loaded must not share a filename with any of its
//! ancestors. The check walks the chain explicitly before anything is read,
//! so a cycle is reported as a clean, ordered list of filenames.

use std::sync::Arc;
use thiserror::Error;

/// A node in a parent chain
pub trait Lineage {
    fn filename(&self) -> Option<&str>;

    /// The next ancestor, if it is still alive
    fn parent(&self) -> Option<Arc<Self>>;
}

/// A filename reappeared in the parent chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("circular reference detected: [{}]", .chain.join(", "))]
pub struct CycleError {
    /// Filenames from the repeated ancestor down to the scenario being loaded
    pub chain: Vec<String>,
}

/// Fail if `filename` or any ancestor's filename repeats along the chain
/// starting at `parent`.
///
/// Ancestors without a filename are walked past but never matched.
pub fn check_no_cycle<N: Lineage>(filename: &str, parent: &Arc<N>) -> Result<(), CycleError> {
    let mut visited = vec![filename.to_string()];
    let mut current = Some(Arc::clone(parent));

    while let Some(node) = current {
        if let Some(name) = node.filename() {
            let seen = visited.iter().any(|v| v == name);
            visited.push(name.to_string());
            if seen {
                visited.reverse();
                return Err(CycleError { chain: visited });
            }
        }
        current = node.parent();
    }

    Ok(())
}

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
