// SPDX-License-Identifier: MIT OR Apache-2.0
//! Edge definitions for the graph.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub Uuid);

impl EdgeId {
    /// Create a new random edge ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A directed edge from one node's output port to another node's input port.
///
/// Ports are addressed by zero-based index into the endpoint node's output
/// or input list; those indices are stable for the node's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique edge ID
    pub id: EdgeId,
    /// Source node ID
    pub source_node: NodeId,
    /// Output port index on the source node
    pub source_port: usize,
    /// Target node ID
    pub target_node: NodeId,
    /// Input port index on the target node
    pub target_port: usize,
    /// Display label
    pub label: String,
}

impl Edge {
    /// Create a new edge with a fresh ID and an empty label
    pub fn new(
        source_node: NodeId,
        source_port: usize,
        target_node: NodeId,
        target_port: usize,
    ) -> Self {
        Self {
            id: EdgeId::new(),
            source_node,
            source_port,
            target_node,
            target_port,
            label: String::new(),
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Check if this edge touches a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.source_node == node_id || self.target_node == node_id
    }
}
