// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scn-core: scenario loading
//!
//! This crate provides:
//! - [`Setting`]: the abstract text resource a scenario is read from
//! - [`ScenarioLoader`]: parse, normalize and assemble a [`Scenario`]
//! - Parent-chain cycle detection by filename
//! - [`LoadError`]: filename, kind tag and message for every load failure
//!
//! Header and action semantics are supplied by the caller through the
//! [`Header`] and [`ActionFactory`] traits.

mod action;
mod cycle;
mod error;
mod header;
mod loader;
mod scenario;
mod setting;
mod shape;
mod traced;

pub use action::{ActionFactory, RawActions};
pub use cycle::{check_no_cycle, CycleError, Lineage};
pub use error::{LoadError, LoadErrorKind, ScenarioError};
pub use header::{BoxError, Header, HeaderError, ScenarioHeader};
pub use loader::{parse_scenario, ScenarioLoader};
pub use scenario::{Ancestors, Scenario};
pub use setting::{InlineSetting, Setting};
pub use shape::{normalize, ShapeError};
pub use traced::TracedSetting;

pub use scn_document::{Mapping, Node, Scalar, LINE_KEY};
