// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loaded scenarios

use crate::cycle::Lineage;
use crate::setting::Setting;
use std::sync::{Arc, Weak};

/// A header plus ordered actions, optionally chained to a parent scenario.
///
/// The parent link is a weak back-reference: it never keeps the parent
/// alive on its own.
#[derive(Debug)]
pub struct Scenario<H, A> {
    setting: Arc<dyn Setting>,
    header: H,
    actions: Vec<A>,
    parent: Option<Weak<Scenario<H, A>>>,
}

impl<H, A> Scenario<H, A> {
    pub fn new(
        setting: Arc<dyn Setting>,
        header: H,
        actions: Vec<A>,
        parent: Option<&Arc<Scenario<H, A>>>,
    ) -> Self {
        Self {
            setting,
            header,
            actions,
            parent: parent.map(Arc::downgrade),
        }
    }

    pub fn setting(&self) -> &Arc<dyn Setting> {
        &self.setting
    }

    pub fn filename(&self) -> Option<&str> {
        self.setting.filename()
    }

    pub fn header(&self) -> &H {
        &self.header
    }

    /// Actions in document order
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// The parent scenario, if one was given and is still alive
    pub fn parent(&self) -> Option<Arc<Scenario<H, A>>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Live ancestors, nearest first
    pub fn ancestors(&self) -> Ancestors<H, A> {
        Ancestors {
            next: self.parent(),
        }
    }
}

impl<H, A> Lineage for Scenario<H, A> {
    fn filename(&self) -> Option<&str> {
        self.setting.filename()
    }

    fn parent(&self) -> Option<Arc<Self>> {
        Scenario::parent(self)
    }
}

/// Iterator over a scenario's parent chain
pub struct Ancestors<H, A> {
    next: Option<Arc<Scenario<H, A>>>,
}

impl<H, A> Iterator for Ancestors<H, A> {
    type Item = Arc<Scenario<H, A>>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
