// SPDX-License-Identifier: MIT OR Apache-2.0
//! Selection state for nodes and edges.

use crate::edge::EdgeId;
use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// A selectable graph entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectTarget {
    /// A node
    Node(NodeId),
    /// An edge
    Edge(EdgeId),
}

/// Selection mode for multi-select gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// Replace the current selection
    #[default]
    Set,
    /// Add to the current selection (Shift+Click)
    Add,
    /// Remove from the current selection (Ctrl+Click)
    Remove,
    /// Toggle in the current selection (Ctrl+Shift+Click)
    Toggle,
}

/// Node/edge selection state.
///
/// Holds ids only; it owns no graph data and is purely advisory to graph
/// operations. Entries referring to deleted ids are pruned at deletion time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Currently selected targets, in selection order, duplicate-free
    targets: Vec<SelectTarget>,
}

impl Selection {
    /// Create a new empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a target is selected
    pub fn contains(&self, target: &SelectTarget) -> bool {
        self.targets.contains(target)
    }

    /// Add a target to the selection (idempotent)
    pub fn add(&mut self, target: SelectTarget) {
        if !self.contains(&target) {
            self.targets.push(target);
        }
    }

    /// Remove a target from the selection
    pub fn remove(&mut self, target: &SelectTarget) {
        self.targets.retain(|t| t != target);
    }

    /// Toggle a target in the selection
    pub fn toggle(&mut self, target: SelectTarget) {
        if self.contains(&target) {
            self.remove(&target);
        } else {
            self.add(target);
        }
    }

    /// Apply a multi-select gesture
    pub fn apply(&mut self, targets: &[SelectTarget], mode: SelectMode) {
        match mode {
            SelectMode::Set => {
                self.targets.clear();
                for target in targets {
                    self.add(*target);
                }
            }
            SelectMode::Add => {
                for target in targets {
                    self.add(*target);
                }
            }
            SelectMode::Remove => {
                for target in targets {
                    self.remove(target);
                }
            }
            SelectMode::Toggle => {
                for target in targets {
                    self.toggle(*target);
                }
            }
        }
    }

    /// Keep only the targets matching a predicate
    pub fn retain(&mut self, keep: impl FnMut(&SelectTarget) -> bool) {
        self.targets.retain(keep);
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    /// Check if the selection is empty
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Get the number of selected targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Iterate over selected targets
    pub fn iter(&self) -> impl Iterator<Item = &SelectTarget> {
        self.targets.iter()
    }

    /// Get the primary (last selected) target
    pub fn primary(&self) -> Option<&SelectTarget> {
        self.targets.last()
    }
}
