// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Line-annotated YAML documents
//!
//! Parses a YAML stream into [`Node`] trees where every mapping carries a
//! `__line__` entry holding the 1-based line its first key appears on.

mod composer;
mod error;
mod node;
mod scalar;

pub use composer::{parse_documents, LineComposer, MAX_ALIAS_NODES};
pub use error::{ComposeError, ParseError};
pub use node::{Mapping, Node, Scalar, LINE_KEY};
pub use scalar::{resolve_plain, resolve_tagged, CORE_TAG_HANDLE};
