// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-stamping composer
//!
//! Builds [`Node`] trees from `yaml-rust2` parser events. Composition goes
//! through two hooks:
//!
//! - [`LineComposer::compose_node`] records the marker line when a collection
//!   opens, as metadata on the pending frame (the node is not a mapping yet
//!   from the caller's point of view, it may still be a sequence)
//! - [`LineComposer::construct_mapping`] copies that line into the finished
//!   mapping under [`LINE_KEY`]
//!
//! Parser markers are already 1-based, and the marker of a block mapping is
//! the position of its first key.
//!
//! Aliases are expanded into copies of the anchored node. The total number of
//! nodes copied this way is capped at [`MAX_ALIAS_NODES`] per stream.

use crate::error::{ComposeError, ParseError};
use crate::node::{Mapping, Node, Scalar, LINE_KEY};
use crate::scalar::{resolve_plain, resolve_tagged, CORE_TAG_HANDLE};
use std::collections::HashMap;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Upper bound on nodes produced by alias expansion
pub const MAX_ALIAS_NODES: usize = 100_000;

/// Parse a (possibly multi-document) stream into annotated nodes
pub fn parse_documents(text: &str) -> Result<Vec<Node>, ParseError> {
    let mut composer = LineComposer::new();
    let mut parser = Parser::new(text.chars());
    parser.load(&mut composer, true)?;
    let documents = composer.finish()?;
    tracing::trace!(documents = documents.len(), bytes = text.len(), "composed");
    Ok(documents)
}

/// A collection being composed, with its out-of-band line stamp
#[derive(Debug)]
enum Frame {
    Sequence {
        line: usize,
        anchor: usize,
        items: Vec<Node>,
    },
    Mapping {
        line: usize,
        anchor: usize,
        entries: Mapping,
        pending_key: Option<String>,
    },
}

/// Event receiver that assembles top-level documents
#[derive(Debug, Default)]
pub struct LineComposer {
    documents: Vec<Node>,
    stack: Vec<Frame>,
    /// Anchored nodes with their node counts
    anchors: HashMap<usize, (Node, usize)>,
    expanded: usize,
    error: Option<ComposeError>,
}

impl LineComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the composer, returning the documents seen so far
    pub fn finish(self) -> Result<Vec<Node>, ComposeError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.documents),
        }
    }

    /// Open a collection, stamping it with the line it starts on
    fn compose_node(&mut self, frame: Frame) {
        self.stack.push(frame);
    }

    /// Materialize a mapping, moving the stamped line into it
    fn construct_mapping(line: usize, mut entries: Mapping) -> Node {
        let line = i64::try_from(line).unwrap_or(i64::MAX);
        entries.insert(LINE_KEY, Node::Scalar(Scalar::Int(line)));
        Node::Mapping(entries)
    }

    fn close(&mut self) -> Result<(), ComposeError> {
        match self.stack.pop() {
            Some(Frame::Sequence {
                line,
                anchor,
                items,
            }) => self.attach(Node::Sequence(items), anchor, line),
            Some(Frame::Mapping {
                line,
                anchor,
                entries,
                ..
            }) => self.attach(Self::construct_mapping(line, entries), anchor, line),
            None => Ok(()),
        }
    }

    /// Place a finished node into its parent (or as a new document)
    fn attach(&mut self, node: Node, anchor: usize, line: usize) -> Result<(), ComposeError> {
        if anchor != 0 {
            self.anchors.insert(anchor, (node.clone(), node_count(&node)));
        }

        match self.stack.last_mut() {
            None => self.documents.push(node),
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => match pending_key.take() {
                Some(key) => {
                    entries.insert(key, node);
                }
                None => match node {
                    Node::Scalar(key) => *pending_key = Some(key.key_text()),
                    other => {
                        return Err(ComposeError::NonScalarKey {
                            found: other.type_name(),
                            line,
                        })
                    }
                },
            },
        }
        Ok(())
    }

    fn handle(&mut self, ev: Event, mark: Marker) -> Result<(), ComposeError> {
        let line = mark.line();
        match ev {
            Event::Scalar(value, style, anchor, tag) => {
                let scalar = resolve_scalar(value, style, tag, line)?;
                self.attach(Node::Scalar(scalar), anchor, line)
            }
            Event::SequenceStart(anchor, ..) => {
                self.compose_node(Frame::Sequence {
                    line,
                    anchor,
                    items: Vec::new(),
                });
                Ok(())
            }
            Event::MappingStart(anchor, ..) => {
                self.compose_node(Frame::Mapping {
                    line,
                    anchor,
                    entries: Mapping::new(),
                    pending_key: None,
                });
                Ok(())
            }
            Event::SequenceEnd | Event::MappingEnd => self.close(),
            Event::Alias(id) => {
                let (node, count) = self
                    .anchors
                    .get(&id)
                    .ok_or(ComposeError::UnknownAnchor { line })?;
                self.expanded += count;
                if self.expanded > MAX_ALIAS_NODES {
                    return Err(ComposeError::AliasExpansion {
                        limit: MAX_ALIAS_NODES,
                        line,
                    });
                }
                let node = node.clone();
                self.attach(node, 0, line)
            }
            _ => Ok(()),
        }
    }
}

/// Type a scalar event: core tags first, then plain resolution
fn resolve_scalar(
    value: String,
    style: TScalarStyle,
    tag: Option<Tag>,
    line: usize,
) -> Result<Scalar, ComposeError> {
    match tag {
        Some(tag) if tag.handle == CORE_TAG_HANDLE => {
            resolve_tagged(&tag.suffix, &value).ok_or_else(|| ComposeError::InvalidTaggedScalar {
                tag: format!("!!{}", tag.suffix),
                value,
                line,
            })
        }
        // Local and application tags carry no typing here
        Some(_) => Ok(Scalar::String(value)),
        None if matches!(style, TScalarStyle::Plain) => Ok(resolve_plain(&value)),
        None => Ok(Scalar::String(value)),
    }
}

fn node_count(node: &Node) -> usize {
    match node {
        Node::Scalar(_) => 1,
        Node::Sequence(items) => 1 + items.iter().map(node_count).sum::<usize>(),
        Node::Mapping(mapping) => 1 + mapping.iter().map(|(_, v)| node_count(v)).sum::<usize>(),
    }
}

impl MarkedEventReceiver for LineComposer {
    fn on_event(&mut self, ev: Event, mark: Marker) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.handle(ev, mark) {
            tracing::debug!(error = %e, "compose failed");
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
