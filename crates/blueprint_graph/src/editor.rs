// SPDX-License-Identifier: MIT OR Apache-2.0
//! Gesture-level editing operations over a graph and its selection.

use crate::edge::{Edge, EdgeId};
use crate::graph::{Graph, GraphError};
use crate::node::{Node, NodeId, NodeTemplate};
use crate::selection::{SelectMode, SelectTarget, Selection};
use tracing::debug;

/// The editing facade the renderer talks to.
///
/// Owns the graph and the selection as a single mutable resource: the
/// renderer delivers one gesture at a time and each operation runs to
/// completion synchronously. Every mutating call validates fully before
/// touching anything, so a returned error means the graph and selection are
/// exactly as they were before the call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphEditor {
    /// The graph being edited
    graph: Graph,
    /// Currently selected nodes and edges
    selection: Selection,
}

impl GraphEditor {
    /// Create a new editor over an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.graph.node(node_id)
    }

    /// Get an edge by ID
    pub fn edge(&self, edge_id: EdgeId) -> Option<&Edge> {
        self.graph.edge(edge_id)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.nodes()
    }

    /// Get all edges
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edges()
    }

    /// Get the current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Connect an output port to an input port (pointer drag between ports).
    ///
    /// Validation is delegated to [`Graph::connect`].
    pub fn connect(
        &mut self,
        source_node: NodeId,
        source_port: usize,
        target_node: NodeId,
        target_port: usize,
    ) -> Result<EdgeId, GraphError> {
        let id = self
            .graph
            .connect(source_node, source_port, target_node, target_port)?;
        debug!(edge = ?id, source = ?source_node, source_port, target = ?target_node, target_port, "connected ports");
        Ok(id)
    }

    /// Remove an edge.
    ///
    /// The edge is pruned from the selection if it was selected; selected
    /// endpoint nodes are unaffected.
    pub fn disconnect(&mut self, edge_id: EdgeId) -> Result<Edge, GraphError> {
        let edge = self
            .graph
            .disconnect(edge_id)
            .ok_or(GraphError::EdgeNotFound(edge_id))?;
        self.selection.remove(&SelectTarget::Edge(edge_id));
        debug!(edge = ?edge_id, "disconnected edge");
        Ok(edge)
    }

    /// Insert a node into an existing edge (double-click on an edge).
    ///
    /// Replaces edge `A.out -> B.in` with `A.out -> N.in[0]` and
    /// `N.out[0] -> B.in`, where `N` is spawned from `template` at the
    /// midpoint of `A` and `B`. The template must declare at least one input
    /// and one output, and both replacement connections must be
    /// tag-compatible; otherwise the call fails with
    /// [`GraphError::IncompatibleInsertedNode`] and the original edge stays.
    pub fn split_edge(
        &mut self,
        edge_id: EdgeId,
        template: &NodeTemplate,
    ) -> Result<(NodeId, EdgeId, EdgeId), GraphError> {
        let edge = self
            .graph
            .edge(edge_id)
            .ok_or(GraphError::EdgeNotFound(edge_id))?;
        let (source_node, source_port) = (edge.source_node, edge.source_port);
        let (target_node, target_port) = (edge.target_node, edge.target_port);

        let first_input = template
            .inputs
            .first()
            .ok_or(GraphError::IncompatibleInsertedNode)?;
        let first_output = template
            .outputs
            .first()
            .ok_or(GraphError::IncompatibleInsertedNode)?;

        // Endpoints are guaranteed to resolve while the edge exists, but the
        // lookups stay fallible rather than panicking.
        let source = self
            .graph
            .node(source_node)
            .ok_or(GraphError::NodeNotFound(source_node))?;
        let target = self
            .graph
            .node(target_node)
            .ok_or(GraphError::NodeNotFound(target_node))?;
        let output = source
            .output(source_port)
            .ok_or(GraphError::IncompatibleInsertedNode)?;
        let input = target
            .input(target_port)
            .ok_or(GraphError::IncompatibleInsertedNode)?;

        if !output.can_connect(first_input) || !first_output.can_connect(input) {
            return Err(GraphError::IncompatibleInsertedNode);
        }

        let mid = [
            (source.position[0] + target.position[0]) / 2.0,
            (source.position[1] + target.position[1]) / 2.0,
        ];

        // All checks passed; commit. The two connects cannot fail: tags were
        // verified above, the inserted node is distinct from both endpoints,
        // its first input is fresh, and removing the edge frees the target
        // input port.
        self.graph.disconnect(edge_id);
        self.selection.remove(&SelectTarget::Edge(edge_id));
        let node_id = self
            .graph
            .add_node(Node::from_template(template).with_position(mid[0], mid[1]));
        let incoming = self.graph.connect(source_node, source_port, node_id, 0)?;
        let outgoing = self.graph.connect(node_id, 0, target_node, target_port)?;

        debug!(edge = ?edge_id, node = ?node_id, kind = %template.kind, "split edge");
        Ok((node_id, incoming, outgoing))
    }

    /// Spawn a node from a template at a canvas position (context menu
    /// "Add ..."), with no edges
    pub fn spawn_node(&mut self, template: &NodeTemplate, position: [f32; 2]) -> NodeId {
        let node = Node::from_template(template).with_position(position[0], position[1]);
        let id = self.graph.add_node(node);
        debug!(node = ?id, kind = %template.kind, "spawned node");
        id
    }

    /// Move a node to a new canvas position (node drag)
    pub fn move_node(&mut self, node_id: NodeId, position: [f32; 2]) -> Result<(), GraphError> {
        let node = self
            .graph
            .node_mut(node_id)
            .ok_or(GraphError::NodeNotFound(node_id))?;
        node.position = position;
        Ok(())
    }

    /// Delete nodes and edges (delete key, context menu "Delete").
    ///
    /// Targeted nodes take every incident edge with them; targeted edges are
    /// removed directly. Absent ids are skipped, so the operation is
    /// idempotent and a cascade may name the same edge twice. Afterwards the
    /// selection is pruned of every id no longer in the graph.
    pub fn delete_cascade(&mut self, targets: &[SelectTarget]) {
        for target in targets {
            match target {
                SelectTarget::Node(id) => {
                    self.graph.remove_node(*id);
                }
                SelectTarget::Edge(id) => {
                    self.graph.disconnect(*id);
                }
            }
        }
        let graph = &self.graph;
        self.selection.retain(|target| match target {
            SelectTarget::Node(id) => graph.node(*id).is_some(),
            SelectTarget::Edge(id) => graph.edge(*id).is_some(),
        });
        debug!(targets = targets.len(), "cascade delete");
    }

    /// Delete everything currently selected
    pub fn delete_selected(&mut self) {
        let targets: Vec<SelectTarget> = self.selection.iter().copied().collect();
        self.delete_cascade(&targets);
    }

    /// Apply a selection gesture
    pub fn select(&mut self, targets: &[SelectTarget], mode: SelectMode) {
        self.selection.apply(targets, mode);
    }

    /// Clear the selection (click on empty canvas)
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}
